//! Axum extractor for the authenticated REST caller

use crate::ApiError;

use chat_core::SubjectId;
use chat_ws::{AppState, authenticate};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Subject taken from the verified `Authorization: Bearer` credential.
///
/// Unlike the chat socket, the REST API has no anonymous mode: a missing
/// header is rejected the same way as an invalid one.
pub struct AuthenticatedSubject(pub SubjectId);

impl FromRequestParts<AppState> for AuthenticatedSubject {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match authenticate(&parts.headers, &state.verifier)? {
                Some(subject_id) => {
                    log::debug!("Authenticated API caller {}", subject_id);
                    Ok(AuthenticatedSubject(subject_id))
                }
                None => Err(ApiError::Unauthorized {
                    message: "Missing Authorization header".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}

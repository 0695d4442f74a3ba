use chat_auth::{AuthError, Result as AuthErrorResult, TokenVerifier, parse_bearer};
use chat_core::SubjectId;

use std::panic::Location;

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use error_location::ErrorLocation;

/// Subject carried by the request's bearer credential, if any.
///
/// No `Authorization` header means an anonymous caller. A header that is
/// present but does not verify is an error, never a downgrade to anonymous.
pub fn authenticate(
    headers: &HeaderMap,
    verifier: &TokenVerifier,
) -> AuthErrorResult<Option<SubjectId>> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value.to_str().map_err(|_| AuthError::Malformed {
        message: "authorization header is not valid ASCII".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = parse_bearer(value)?;
    verifier.verify_now(token).map(Some)
}

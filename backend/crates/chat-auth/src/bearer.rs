use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the credential from an `Authorization` header value.
#[track_caller]
pub fn parse_bearer(header_value: &str) -> AuthErrorResult<&str> {
    match header_value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        Some(_) => Err(AuthError::Malformed {
            message: "empty bearer token".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        None => Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

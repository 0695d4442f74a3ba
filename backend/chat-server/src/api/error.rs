//! REST API error types
//!
//! Every variant renders as `{"error": {"code", "message", "field"?}}` with
//! the matching HTTP status.

use chat_auth::AuthError;
use chat_core::CoreError;
use chat_identity::IdentityError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "PROFILE_UPDATE_FAILED")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or rejected credential (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Identity unknown to the authority (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Identity authority unreachable (503)
    #[error("Service unavailable: {message} {location}")]
    ServiceUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Profile store rejected the write (500)
    #[error("Profile update failed: {message} {location}")]
    ProfileUpdateFailed {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } | ApiError::ProfileUpdateFailed { .. } => {
                log::error!("{}", self)
            }
            _ => log::warn!("{}", self),
        }

        let (status, code, message, field) = match self {
            ApiError::Unauthorized { message, .. } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message, None)
            }
            ApiError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", message, None)
            }
            ApiError::ServiceUnavailable { message, .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                message,
                None,
            ),
            ApiError::Validation { message, field, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::ProfileUpdateFailed { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PROFILE_UPDATE_FAILED",
                message,
                None,
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
                None,
            ),
        };

        let body = ApiErrorBody {
            code: code.into(),
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        ApiError::Unauthorized {
            message: format!("Credential rejected ({})", e.error_code()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<IdentityError> for ApiError {
    #[track_caller]
    fn from(e: IdentityError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if e.is_not_found() {
            return ApiError::NotFound {
                message: "Identity not found".to_string(),
                location,
            };
        }

        match e {
            IdentityError::IdentityUnavailable { subject_id, .. } => {
                ApiError::ServiceUnavailable {
                    message: format!("Identity for user {subject_id} is temporarily unavailable"),
                    location,
                }
            }
            IdentityError::ProfileUpdateFailed { subject_id, .. } => {
                ApiError::ProfileUpdateFailed {
                    message: format!("Could not save profile for user {subject_id}"),
                    location,
                }
            }
            IdentityError::InvalidProfile {
                source: CoreError::Validation { message, field, .. },
                ..
            } => ApiError::Validation {
                message,
                field,
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

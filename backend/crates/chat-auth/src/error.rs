use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Malformed token: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signature is invalid {location}")]
    InvalidSignature { location: ErrorLocation },

    #[error("Token expired at {expired_at} {location}")]
    Expired {
        expired_at: i64,
        location: ErrorLocation,
    },

    #[error("Token is missing the '{claim}' claim {location}")]
    MissingClaim {
        claim: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },
}

impl AuthError {
    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "MALFORMED_TOKEN",
            Self::InvalidSignature { .. } => "INVALID_SIGNATURE",
            Self::Expired { .. } => "TOKEN_EXPIRED",
            Self::MissingClaim { .. } => "MISSING_CLAIM",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

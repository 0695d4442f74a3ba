use crate::AuthorityError;

use chat_core::{CoreError, SubjectId};

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity {subject_id} unavailable: {source} {location}")]
    IdentityUnavailable {
        subject_id: SubjectId,
        #[source]
        source: AuthorityError,
        location: ErrorLocation,
    },

    #[error("Profile update for {subject_id} failed: {message} {location}")]
    ProfileUpdateFailed {
        subject_id: SubjectId,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid profile: {source} {location}")]
    InvalidProfile {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl IdentityError {
    /// True when the authority reported the subject as unknown, as opposed
    /// to being unreachable.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::IdentityUnavailable {
                source: AuthorityError::NotFound { .. },
                ..
            }
        )
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;

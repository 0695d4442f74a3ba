use chat_core::{RemoteIdentity, SubjectId};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthorityError {
    #[error("Identity {subject_id} not found at authority {location}")]
    NotFound {
        subject_id: SubjectId,
        location: ErrorLocation,
    },

    #[error("Identity authority unreachable: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthorityError {
    #[track_caller]
    pub fn not_found(subject_id: SubjectId) -> Self {
        Self::NotFound {
            subject_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// External service of record for email and username.
#[async_trait]
pub trait IdentityAuthority: Send + Sync {
    async fn get_identity(&self, subject_id: SubjectId) -> Result<RemoteIdentity, AuthorityError>;
}

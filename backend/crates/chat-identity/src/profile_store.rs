use chat_core::{LocalProfile, ProfileUpdate, SubjectId};
use chat_db::ProfileRepository;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Profile {subject_id} not found {location}")]
    NotFound {
        subject_id: SubjectId,
        location: ErrorLocation,
    },

    #[error("Profile store error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn not_found(subject_id: SubjectId) -> Self {
        Self::NotFound {
            subject_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<chat_db::DbError> for StoreError {
    #[track_caller]
    fn from(source: chat_db::DbError) -> Self {
        Self::backend(source.to_string())
    }
}

/// Locally owned profile data. Saves are upserts.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, subject_id: SubjectId) -> Result<LocalProfile, StoreError>;

    async fn save_profile(
        &self,
        subject_id: SubjectId,
        update: &ProfileUpdate,
    ) -> Result<LocalProfile, StoreError>;
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    async fn get_profile(&self, subject_id: SubjectId) -> Result<LocalProfile, StoreError> {
        self.find(subject_id)
            .await?
            .ok_or_else(|| StoreError::not_found(subject_id))
    }

    async fn save_profile(
        &self,
        subject_id: SubjectId,
        update: &ProfileUpdate,
    ) -> Result<LocalProfile, StoreError> {
        Ok(self.upsert(subject_id, update).await?)
    }
}

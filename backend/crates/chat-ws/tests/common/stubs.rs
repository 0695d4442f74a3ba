#![allow(dead_code)]

use chat_core::{LocalProfile, ProfileUpdate, RemoteIdentity, SubjectId};
use chat_identity::{AuthorityError, IdentityAuthority, ProfileStore, StoreError};

use std::collections::HashMap;

use async_trait::async_trait;

/// Authority that knows a fixed set of users
#[derive(Default)]
pub struct FixedAuthority {
    pub identities: HashMap<SubjectId, RemoteIdentity>,
}

impl FixedAuthority {
    pub fn with_user(subject_id: SubjectId, username: &str) -> Self {
        let mut identities = HashMap::new();
        identities.insert(
            subject_id,
            RemoteIdentity {
                subject_id,
                email: format!("{username}@example.com"),
                username: username.to_string(),
            },
        );
        Self { identities }
    }
}

#[async_trait]
impl IdentityAuthority for FixedAuthority {
    async fn get_identity(&self, subject_id: SubjectId) -> Result<RemoteIdentity, AuthorityError> {
        self.identities
            .get(&subject_id)
            .cloned()
            .ok_or_else(|| AuthorityError::not_found(subject_id))
    }
}

/// Profile store with no profiles that refuses writes
pub struct EmptyProfiles;

#[async_trait]
impl ProfileStore for EmptyProfiles {
    async fn get_profile(&self, _subject_id: SubjectId) -> Result<LocalProfile, StoreError> {
        Err(StoreError::backend("no profiles in tests"))
    }

    async fn save_profile(
        &self,
        _subject_id: SubjectId,
        _update: &ProfileUpdate,
    ) -> Result<LocalProfile, StoreError> {
        Err(StoreError::backend("read-only"))
    }
}

#![allow(dead_code)]

use chat_core::{LocalProfile, ProfileUpdate, RemoteIdentity, SubjectId};
use chat_identity::{AuthorityError, IdentityAuthority, ProfileStore, StoreError};

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

/// Authority with a fixed user table that can be switched offline
#[derive(Default)]
pub struct ScriptedAuthority {
    identities: HashMap<SubjectId, RemoteIdentity>,
    offline: AtomicBool,
}

impl ScriptedAuthority {
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
        Self {
            identities,
            offline: AtomicBool::new(false),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

#[async_trait]
impl IdentityAuthority for ScriptedAuthority {
    async fn get_identity(&self, subject_id: SubjectId) -> Result<RemoteIdentity, AuthorityError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AuthorityError::transport("authority offline"));
        }

        self.identities
            .get(&subject_id)
            .cloned()
            .ok_or_else(|| AuthorityError::not_found(subject_id))
    }
}

/// Profile store backed by a map; writes can be made to fail
#[derive(Default)]
pub struct MemoryProfiles {
    profiles: Mutex<HashMap<SubjectId, LocalProfile>>,
    fail_saves: AtomicBool,
}

impl MemoryProfiles {
    pub fn failing_saves() -> Self {
        Self {
            fail_saves: AtomicBool::new(true),
            ..Self::default()
        }
    }
}

#[async_trait]
impl ProfileStore for MemoryProfiles {
    async fn get_profile(&self, subject_id: SubjectId) -> Result<LocalProfile, StoreError> {
        self.profiles
            .lock()
            .unwrap()
            .get(&subject_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(subject_id))
    }

    async fn save_profile(
        &self,
        subject_id: SubjectId,
        update: &ProfileUpdate,
    ) -> Result<LocalProfile, StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::backend("disk full"));
        }

        let now = chrono::Utc::now();
        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles.entry(subject_id).or_insert_with(|| LocalProfile {
            subject_id,
            first_name: None,
            last_name: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        });

        if let Some(first_name) = &update.first_name {
            profile.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &update.last_name {
            profile.last_name = Some(last_name.clone());
        }
        if let Some(avatar_url) = &update.avatar_url {
            profile.avatar_url = Some(avatar_url.clone());
        }
        profile.updated_at = now;

        Ok(profile.clone())
    }
}

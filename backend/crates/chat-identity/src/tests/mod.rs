
use crate::{AuthorityError, IdentityAuthority, ProfileStore, StoreError};

use chat_cache::{CacheError, CacheStore};
use chat_core::{LocalProfile, ProfileUpdate, RemoteIdentity, SubjectId};

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

/// Authority stub that counts calls
#[derive(Default)]
pub(crate) struct StubAuthority {
    identities: Mutex<HashMap<SubjectId, RemoteIdentity>>,
    pub unreachable: AtomicBool,
    calls: AtomicUsize,
}

impl StubAuthority {
    pub fn with(identity: RemoteIdentity) -> Self {
        let stub = Self::default();
        stub.identities
            .lock()
            .unwrap()
            .insert(identity.subject_id, identity);
        stub
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityAuthority for StubAuthority {
    async fn get_identity(&self, subject_id: SubjectId) -> Result<RemoteIdentity, AuthorityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.unreachable.load(Ordering::SeqCst) {
            return Err(AuthorityError::transport("connection refused"));
        }

        self.identities
            .lock()
            .unwrap()
            .get(&subject_id)
            .cloned()
            .ok_or_else(|| AuthorityError::not_found(subject_id))
    }
}

/// Profile store stub with switchable failures
#[derive(Default)]
pub(crate) struct StubProfiles {
    profiles: Mutex<HashMap<SubjectId, LocalProfile>>,
    pub fail_reads: AtomicBool,
    pub fail_saves: AtomicBool,
    reads: AtomicUsize,
    saves: AtomicUsize,
}

impl StubProfiles {
    pub fn insert(&self, subject_id: SubjectId, first_name: &str) {
        let now = Utc::now();
        self.profiles.lock().unwrap().insert(
            subject_id,
            LocalProfile {
                subject_id,
                first_name: Some(first_name.to_string()),
                last_name: None,
                avatar_url: None,
                created_at: now,
                updated_at: now,
            },
        );
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for StubProfiles {
    async fn get_profile(&self, subject_id: SubjectId) -> Result<LocalProfile, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::backend("database is locked"));
        }

        self.profiles
            .lock()
            .unwrap()
            .get(&subject_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                subject_id,
                location: error_location::ErrorLocation::from(std::panic::Location::caller()),
            })
    }

    async fn save_profile(
        &self,
        subject_id: SubjectId,
        update: &ProfileUpdate,
    ) -> Result<LocalProfile, StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);

        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::backend("disk full"));
        }

        let now = Utc::now();
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

/// Cache backend that is always down
pub(crate) struct UnreachableCache;

#[async_trait]
impl CacheStore for UnreachableCache {
    async fn get_raw(&self, _key: &str) -> chat_cache::Result<Option<Vec<u8>>> {
        Err(CacheError::transport("connection refused"))
    }

    async fn set_raw(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> chat_cache::Result<()> {
        Err(CacheError::transport("connection refused"))
    }

    async fn delete(&self, _key: &str) -> chat_cache::Result<()> {
        Err(CacheError::transport("connection refused"))
    }
}

pub(crate) fn ann() -> RemoteIdentity {
    RemoteIdentity {
        subject_id: 42,
        email: "a@b.com".to_string(),
        username: "ann".to_string(),
    }
}

use crate::{
    CacheTtls, IdentityAuthority, IdentityError, ProfileStore, Result as IdentityErrorResult,
    StoreError, identity_cache_key, profile_cache_key,
};

use chat_cache::{CacheLayer, CacheLookup};
use chat_core::{LocalProfile, MergedIdentity, ProfileUpdate, RemoteIdentity, SubjectId};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, warn};
use serde::de::DeserializeOwned;

/// Produces the merged identity view for a subject.
///
/// The remote identity and the local profile each run their own cache-aside
/// pipeline with their own TTL. Cache failures never reach the caller: a
/// broken cache only means every read goes to the source of record.
#[derive(Clone)]
pub struct IdentityResolver {
    cache: CacheLayer,
    authority: Arc<dyn IdentityAuthority>,
    profiles: Arc<dyn ProfileStore>,
    ttls: CacheTtls,
}

impl IdentityResolver {
    pub fn new(
        cache: CacheLayer,
        authority: Arc<dyn IdentityAuthority>,
        profiles: Arc<dyn ProfileStore>,
        ttls: CacheTtls,
    ) -> Self {
        Self {
            cache,
            authority,
            profiles,
            ttls,
        }
    }

    /// Remote identity is mandatory; the profile overlay is optional and any
    /// failure to obtain it resolves to "no profile".
    pub async fn resolve_full(&self, subject_id: SubjectId) -> IdentityErrorResult<MergedIdentity> {
        let remote = self.resolve_remote(subject_id).await?;
        let profile = self.resolve_profile(subject_id).await;

        Ok(MergedIdentity::merge(subject_id, remote, profile))
    }

    /// Authority record alone, through the `identity:` cache. No profile read.
    pub async fn resolve_identity(
        &self,
        subject_id: SubjectId,
    ) -> IdentityErrorResult<RemoteIdentity> {
        self.resolve_remote(subject_id).await
    }

    /// Write to the store, then invalidate the cached profile, then re-read.
    ///
    /// A failed write leaves the cache untouched.
    pub async fn update_profile(
        &self,
        subject_id: SubjectId,
        update: &ProfileUpdate,
    ) -> IdentityErrorResult<MergedIdentity> {
        update
            .validate()
            .map_err(|source| IdentityError::InvalidProfile {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.profiles
            .save_profile(subject_id, update)
            .await
            .map_err(|e| IdentityError::ProfileUpdateFailed {
                subject_id,
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.invalidate_profile(subject_id).await;

        self.resolve_full(subject_id).await
    }

    /// Drop the cached profile. Failures are logged only; the entry then
    /// expires on its TTL.
    pub async fn invalidate_profile(&self, subject_id: SubjectId) {
        let key = profile_cache_key(subject_id);
        if let Err(e) = self.cache.delete(&key).await {
            warn!("Failed to invalidate {key}: {e}");
        }
    }

    async fn resolve_remote(&self, subject_id: SubjectId) -> IdentityErrorResult<RemoteIdentity> {
        let key = identity_cache_key(subject_id);

        if let Some(identity) = self.cached::<RemoteIdentity>(&key).await {
            return Ok(identity);
        }

        let identity = self
            .authority
            .get_identity(subject_id)
            .await
            .map_err(|source| IdentityError::IdentityUnavailable {
                subject_id,
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        if let Err(e) = self.cache.set(&key, &identity, self.ttls.identity).await {
            warn!("Failed to cache {key}: {e}");
        }

        Ok(identity)
    }

    async fn resolve_profile(&self, subject_id: SubjectId) -> Option<LocalProfile> {
        let key = profile_cache_key(subject_id);

        if let Some(profile) = self.cached::<LocalProfile>(&key).await {
            return Some(profile);
        }

        let profile = match self.profiles.get_profile(subject_id).await {
            Ok(profile) => profile,
            Err(StoreError::NotFound { .. }) => {
                debug!("No local profile for {subject_id}");
                return None;
            }
            Err(e) => {
                warn!("Profile store failed for {subject_id}, continuing without profile: {e}");
                return None;
            }
        };

        if let Err(e) = self.cache.set(&key, &profile, self.ttls.profile).await {
            warn!("Failed to cache {key}: {e}");
        }

        Some(profile)
    }

    /// Cache read where transport errors and corrupted entries count as misses.
    async fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.cache.get::<T>(key).await {
            Ok(CacheLookup::Hit(value)) => Some(value),
            Ok(CacheLookup::Miss) => None,
            Ok(CacheLookup::Corrupted(reason)) => {
                warn!("Ignoring corrupted cache entry {key}: {reason}");
                None
            }
            Err(e) => {
                warn!("Cache read for {key} failed, falling back to source: {e}");
                None
            }
        }
    }
}

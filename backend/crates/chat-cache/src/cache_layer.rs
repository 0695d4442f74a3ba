use crate::{CacheError, CacheLookup, CacheStore, Result as CacheErrorResult};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use metrics::counter;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Typed read/write/delete over any [`CacheStore`].
///
/// Values are stored as JSON. The layer knows nothing about what the keys
/// mean; namespacing is the caller's job.
#[derive(Clone)]
pub struct CacheLayer {
    store: Arc<dyn CacheStore>,
}

impl CacheLayer {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> CacheErrorResult<CacheLookup<T>> {
        let raw = match self.store.get_raw(key).await {
            Ok(raw) => raw,
            Err(e) => {
                counter!("chat_cache.errors.transport").increment(1);
                return Err(e);
            }
        };

        let Some(bytes) = raw else {
            debug!("cache miss: {key}");
            counter!("chat_cache.misses").increment(1);
            return Ok(CacheLookup::Miss);
        };

        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => {
                debug!("cache hit: {key}");
                counter!("chat_cache.hits").increment(1);
                Ok(CacheLookup::Hit(value))
            }
            Err(e) => {
                warn!("cache entry {key} is corrupted: {e}");
                counter!("chat_cache.corrupted").increment(1);
                Ok(CacheLookup::Corrupted(e.to_string()))
            }
        }
    }

    pub async fn set<T: Serialize + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> CacheErrorResult<()> {
        let bytes = serde_json::to_vec(value).map_err(CacheError::serialize)?;

        self.store.set_raw(key, bytes, ttl).await.inspect_err(|_| {
            counter!("chat_cache.errors.transport").increment(1);
        })
    }

    /// Idempotent
    pub async fn delete(&self, key: &str) -> CacheErrorResult<()> {
        self.store.delete(key).await.inspect_err(|_| {
            counter!("chat_cache.errors.transport").increment(1);
        })
    }
}

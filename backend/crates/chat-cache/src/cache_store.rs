use crate::Result as CacheErrorResult;

use std::time::Duration;

use async_trait::async_trait;

/// Byte-level TTL key-value store.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// `Ok(None)` when the key is absent or expired.
    async fn get_raw(&self, key: &str) -> CacheErrorResult<Option<Vec<u8>>>;

    /// Overwrites any existing value.
    async fn set_raw(&self, key: &str, value: Vec<u8>, ttl: Duration) -> CacheErrorResult<()>;

    /// Absent keys are not an error.
    async fn delete(&self, key: &str) -> CacheErrorResult<()>;
}

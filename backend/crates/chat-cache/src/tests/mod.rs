
use crate::{CacheError, CacheStore, Result as CacheErrorResult};

use std::time::Duration;

use async_trait::async_trait;

/// Store whose every call fails, as an unreachable backend would
pub(crate) struct UnreachableStore;

#[async_trait]
impl CacheStore for UnreachableStore {
    async fn get_raw(&self, _key: &str) -> CacheErrorResult<Option<Vec<u8>>> {
        Err(CacheError::transport("connection refused"))
    }

    async fn set_raw(&self, _key: &str, _value: Vec<u8>, _ttl: Duration) -> CacheErrorResult<()> {
        Err(CacheError::transport("connection refused"))
    }

    async fn delete(&self, _key: &str) -> CacheErrorResult<()> {
        Err(CacheError::transport("connection refused"))
    }
}

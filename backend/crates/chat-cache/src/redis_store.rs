use crate::{CacheError, CacheStore, Result as CacheErrorResult};

use std::time::Duration;

use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::{Config as PoolConfig, Pool, Runtime};

/// Shared cache backed by a pooled Redis connection.
///
/// Invalidations made through one process are visible to every process
/// using the same Redis instance.
#[derive(Clone)]
pub struct RedisStore {
    pool: Pool,
}

impl RedisStore {
    /// Build a pool for `url`. No connection is opened until first use.
    #[track_caller]
    pub fn connect(url: &str) -> CacheErrorResult<Self> {
        let pool = PoolConfig::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| CacheError::transport(format!("failed to create redis pool: {e}")))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get_raw(&self, key: &str) -> CacheErrorResult<Option<Vec<u8>>> {
        let mut conn = self.pool.get().await?;
        let data: Option<Vec<u8>> = conn.get(key).await?;
        Ok(data)
    }

    async fn set_raw(&self, key: &str, value: Vec<u8>, ttl: Duration) -> CacheErrorResult<()> {
        let mut conn = self.pool.get().await?;
        // SET EX rejects 0
        let ttl_secs = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, ttl_secs).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheErrorResult<()> {
        let mut conn = self.pool.get().await?;
        conn.del::<_, ()>(key).await?;
        Ok(())
    }
}

use crate::{CacheStore, Result as CacheErrorResult};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

#[derive(Debug, Clone)]
struct MemoryEntry {
    data: Arc<Vec<u8>>,
    inserted_at: Instant,
    ttl: Duration,
}

impl MemoryEntry {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() >= self.ttl
    }
}

/// Writes between full sweeps of expired entries.
const PURGE_INTERVAL: usize = 64;

/// Process-local store for single-instance deployments and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, MemoryEntry>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included until read or purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every expired entry, including keys that are never read again.
    pub fn purge_expired(&self) {
        self.entries.retain(|_, entry| !entry.is_expired());
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get_raw(&self, key: &str) -> CacheErrorResult<Option<Vec<u8>>> {
        let Some(entry) = self.entries.get(key) else {
            return Ok(None);
        };

        if entry.is_expired() {
            drop(entry);
            // Re-checked under the write lock: a concurrent set may have replaced it
            self.entries.remove_if(key, |_, current| current.is_expired());
            return Ok(None);
        }

        Ok(Some(entry.data.as_ref().clone()))
    }

    async fn set_raw(&self, key: &str, value: Vec<u8>, ttl: Duration) -> CacheErrorResult<()> {
        self.entries.insert(
            key.to_string(),
            MemoryEntry {
                data: Arc::new(value),
                inserted_at: Instant::now(),
                ttl,
            },
        );

        if self.writes.fetch_add(1, Ordering::Relaxed) % PURGE_INTERVAL == PURGE_INTERVAL - 1 {
            self.purge_expired();
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheErrorResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

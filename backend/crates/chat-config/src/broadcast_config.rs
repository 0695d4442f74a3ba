use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MAX_QUEUE_CAPACITY: usize = 1_000_000;
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Intake queue settings for the broadcast dispatcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// Queued messages before publishers block; 0 means unbounded
    pub queue_capacity: usize,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl BroadcastConfig {
    pub fn is_unbounded(&self) -> bool {
        self.queue_capacity == 0
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.queue_capacity > MAX_QUEUE_CAPACITY {
            return Err(ConfigError::config(format!(
                "broadcast.queue_capacity must be 0 (unbounded) or at most {}, got {}",
                MAX_QUEUE_CAPACITY, self.queue_capacity
            )));
        }

        Ok(())
    }
}

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize cache value: {source} {location}")]
    Serialize {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CacheError {
    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serialize(source: serde_json::Error) -> Self {
        Self::Serialize {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<deadpool_redis::PoolError> for CacheError {
    #[track_caller]
    fn from(source: deadpool_redis::PoolError) -> Self {
        Self::transport(format!("redis pool: {source}"))
    }
}

impl From<deadpool_redis::redis::RedisError> for CacheError {
    #[track_caller]
    fn from(source: deadpool_redis::redis::RedisError) -> Self {
        Self::transport(format!("redis command: {source}"))
    }
}

pub type Result<T> = std::result::Result<T, CacheError>;

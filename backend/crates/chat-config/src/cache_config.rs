use crate::{ConfigError, ConfigErrorResult};

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

pub const MIN_CACHE_TTL_SECS: u64 = 1;
pub const MAX_CACHE_TTL_SECS: u64 = 86_400;
pub const DEFAULT_IDENTITY_TTL_SECS: u64 = 300;
pub const DEFAULT_PROFILE_TTL_SECS: u64 = 600;

/// Where cached identity and profile records live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackendKind {
    /// Process-local map
    #[default]
    Memory,
    /// Shared Redis instance
    Redis,
}

impl FromStr for CacheBackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            other => Err(ConfigError::cache(format!(
                "unknown cache backend '{other}' (expected 'memory' or 'redis')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub backend: CacheBackendKind,
    pub redis_url: Option<String>,
    /// TTL for records fetched from the identity authority
    pub identity_ttl_secs: u64,
    /// TTL for locally stored profiles
    pub profile_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackendKind::default(),
            redis_url: None,
            identity_ttl_secs: DEFAULT_IDENTITY_TTL_SECS,
            profile_ttl_secs: DEFAULT_PROFILE_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn identity_ttl(&self) -> Duration {
        Duration::from_secs(self.identity_ttl_secs)
    }

    pub fn profile_ttl(&self) -> Duration {
        Duration::from_secs(self.profile_ttl_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("cache.identity_ttl_secs", self.identity_ttl_secs),
            ("cache.profile_ttl_secs", self.profile_ttl_secs),
        ] {
            if !(MIN_CACHE_TTL_SECS..=MAX_CACHE_TTL_SECS).contains(&value) {
                return Err(ConfigError::cache(format!(
                    "{} must be {}-{}, got {}",
                    name, MIN_CACHE_TTL_SECS, MAX_CACHE_TTL_SECS, value
                )));
            }
        }

        if self.backend == CacheBackendKind::Redis {
            match self.redis_url.as_deref() {
                None | Some("") => {
                    return Err(ConfigError::cache(
                        "cache.redis_url is required when cache.backend = \"redis\"",
                    ));
                }
                Some(url) if !url.starts_with("redis://") && !url.starts_with("rediss://") => {
                    return Err(ConfigError::cache(
                        "cache.redis_url must start with redis:// or rediss://",
                    ));
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

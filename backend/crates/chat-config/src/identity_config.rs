use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_IDENTITY_BASE_URL: &str = "http://127.0.0.1:8082";
pub const MIN_IDENTITY_TIMEOUT_SECS: u64 = 1;
pub const MAX_IDENTITY_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_IDENTITY_TIMEOUT_SECS: u64 = 5;

/// Connection settings for the external identity authority.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_IDENTITY_BASE_URL),
            timeout_secs: DEFAULT_IDENTITY_TIMEOUT_SECS,
        }
    }
}

impl IdentityConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::identity(format!(
                "identity.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_IDENTITY_TIMEOUT_SECS
            || self.timeout_secs > MAX_IDENTITY_TIMEOUT_SECS
        {
            return Err(ConfigError::identity(format!(
                "identity.timeout_secs must be {}-{}, got {}",
                MIN_IDENTITY_TIMEOUT_SECS, MAX_IDENTITY_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}

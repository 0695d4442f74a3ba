use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_JWT_SECRET_LENGTH: usize = 32;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret shared with the identity authority
    pub jwt_secret: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret.as_deref() {
            None => Err(ConfigError::auth(
                "auth.jwt_secret is required (set CHAT_AUTH_JWT_SECRET)",
            )),
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )))
            }
            Some(_) => Ok(()),
        }
    }
}

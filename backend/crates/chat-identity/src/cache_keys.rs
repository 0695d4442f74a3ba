use chat_core::SubjectId;

use std::time::Duration;

const IDENTITY_KEY_PREFIX: &str = "identity:";
const PROFILE_KEY_PREFIX: &str = "profile:";

pub fn identity_cache_key(subject_id: SubjectId) -> String {
    format!("{IDENTITY_KEY_PREFIX}{subject_id}")
}

pub fn profile_cache_key(subject_id: SubjectId) -> String {
    format!("{PROFILE_KEY_PREFIX}{subject_id}")
}

/// Per-source cache lifetimes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtls {
    pub identity: Duration,
    pub profile: Duration,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            identity: Duration::from_secs(300),
            profile: Duration::from_secs(600),
        }
    }
}

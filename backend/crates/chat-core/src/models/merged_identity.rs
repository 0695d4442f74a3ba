use crate::{LocalProfile, RemoteIdentity, SubjectId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authority identity with the optional local profile laid over it.
///
/// Profile-derived fields are `None` when no profile exists; they are never
/// filled with empty placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedIdentity {
    #[serde(rename = "user_id")]
    pub subject_id: SubjectId,
    pub email: String,
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MergedIdentity {
    /// Merge both sources under the id they were fetched with.
    pub fn merge(
        subject_id: SubjectId,
        remote: RemoteIdentity,
        profile: Option<LocalProfile>,
    ) -> Self {
        let mut merged = Self {
            subject_id,
            email: remote.email,
            username: remote.username,
            first_name: None,
            last_name: None,
            avatar_url: None,
            created_at: None,
            updated_at: None,
        };

        if let Some(profile) = profile {
            merged.first_name = profile.first_name;
            merged.last_name = profile.last_name;
            merged.avatar_url = profile.avatar_url;
            merged.created_at = Some(profile.created_at);
            merged.updated_at = Some(profile.updated_at);
        }

        merged
    }
}

use crate::SubjectId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Locally persisted profile overlay for a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalProfile {
    #[serde(rename = "user_id")]
    pub subject_id: SubjectId,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

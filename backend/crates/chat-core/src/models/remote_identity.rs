use crate::SubjectId;

use serde::{Deserialize, Serialize};

/// Identity record owned by the external identity authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteIdentity {
    #[serde(rename = "user_id")]
    pub subject_id: SubjectId,
    pub email: String,
    pub username: String,
}

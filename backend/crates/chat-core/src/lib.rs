pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::chat_message::{ChatMessage, SERVER_SENDER_NAME};
pub use models::local_profile::LocalProfile;
pub use models::merged_identity::MergedIdentity;
pub use models::profile_update::{MAX_AVATAR_URL_LENGTH, MAX_NAME_LENGTH, ProfileUpdate};
pub use models::remote_identity::RemoteIdentity;

/// Identifier of an authenticated user as issued by the identity authority.
pub type SubjectId = i64;

#[cfg(test)]
mod tests;

pub mod chat_message;
pub mod local_profile;
pub mod merged_identity;
pub mod profile_update;
pub mod remote_identity;

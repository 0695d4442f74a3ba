use serde::{Deserialize, Serialize};

/// Sender name used for frames the server itself originates.
pub const SERVER_SENDER_NAME: &str = "Server";

/// A chat line as it travels over the wire: `{"user": ..., "text": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "user", default)]
    pub sender_name: String,
    #[serde(default)]
    pub text: String,
}

impl ChatMessage {
    pub fn new(sender_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender_name: sender_name.into(),
            text: text.into(),
        }
    }

    /// Message authored by the server rather than a participant
    pub fn from_server(text: impl Into<String>) -> Self {
        Self::new(SERVER_SENDER_NAME, text)
    }

    /// Fill in the sender for inbound frames that left `user` empty.
    pub fn with_default_sender(mut self, display_name: &str) -> Self {
        if self.sender_name.is_empty() {
            self.sender_name = display_name.to_string();
        }
        self
    }
}

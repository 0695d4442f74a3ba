pub mod chat_session;
pub mod echo;
pub mod general;

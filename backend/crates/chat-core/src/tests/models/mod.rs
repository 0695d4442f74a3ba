mod chat_message;
mod profile_update;

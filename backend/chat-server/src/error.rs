use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] chat_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] chat_db::DbError),

    #[error("Cache error: {0}")]
    Cache(#[from] chat_cache::CacheError),

    #[error("Identity authority client error: {0}")]
    Authority(#[from] chat_identity::AuthorityError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Metrics exporter error: {message} {location}")]
    Metrics {
        message: String,
        location: ErrorLocation,
    },

    #[error("Startup error: {message} {location}")]
    Startup {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;

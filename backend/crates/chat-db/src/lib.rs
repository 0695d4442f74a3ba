pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, connect};
pub use error::{DbError, Result};
pub use repositories::profile_repository::ProfileRepository;

pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics_exporter;
pub mod routes;
pub mod startup;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::subject_id::AuthenticatedSubject,
    profile::{get_my_profile, update_my_profile},
    user::get_me,
};
pub use error::{Result, ServerError};

pub use crate::routes::build_router;

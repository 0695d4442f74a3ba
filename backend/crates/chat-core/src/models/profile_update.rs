use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_AVATAR_URL_LENGTH: usize = 2048;

/// Partial profile change. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.avatar_url.is_none()
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        check_length("first_name", self.first_name.as_deref(), MAX_NAME_LENGTH)?;
        check_length("last_name", self.last_name.as_deref(), MAX_NAME_LENGTH)?;
        check_length("avatar_url", self.avatar_url.as_deref(), MAX_AVATAR_URL_LENGTH)?;

        if let Some(url) = self.avatar_url.as_deref()
            && !url.is_empty()
            && !(url.starts_with("https://") || url.starts_with("http://"))
        {
            return Err(CoreError::Validation {
                message: "avatar_url must be an http(s) URL".to_string(),
                field: Some("avatar_url".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

#[track_caller]
fn check_length(field: &str, value: Option<&str>, max: usize) -> CoreErrorResult<()> {
    match value {
        Some(v) if v.chars().count() > max => Err(CoreError::Validation {
            message: format!("{field} exceeds maximum length of {max} characters"),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }),
        _ => Ok(()),
    }
}

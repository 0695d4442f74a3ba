use crate::{AuthError, Result as AuthErrorResult};

use chat_core::SubjectId;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Claims this service reads from a token.
///
/// Issuers have encoded `uid` and `exp` both as JSON numbers and as decimal
/// strings, so each is kept raw until normalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Claims {
    /// Subject id as issued by the identity authority
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<NumericClaim>,
    /// Registered subject claim, used when `uid` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<NumericClaim>,
    /// Expiration timestamp (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<NumericClaim>,
}

/// A claim value that may arrive as a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericClaim {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl NumericClaim {
    #[track_caller]
    pub fn to_i64(&self, claim: &'static str) -> AuthErrorResult<i64> {
        match self {
            Self::Integer(v) => Ok(*v),
            Self::Float(v) if v.is_finite() => Ok(*v as i64),
            Self::Float(v) => Err(malformed(format!("claim '{claim}' is not finite: {v}"))),
            Self::Text(s) => s.trim().parse::<i64>().map_err(|e| {
                malformed(format!("claim '{claim}' is not an integer string: {e}"))
            }),
        }
    }

    /// Strict variant for identifiers: a float is only accepted when it is a
    /// whole number inside the `i64` range, so no token maps onto another
    /// subject by rounding or saturation.
    #[track_caller]
    pub fn to_subject_id(&self, claim: &'static str) -> AuthErrorResult<SubjectId> {
        match self {
            Self::Float(v)
                if v.fract() == 0.0 && (i64::MIN as f64) <= *v && *v < (i64::MAX as f64) =>
            {
                Ok(*v as i64)
            }
            Self::Float(v) => Err(malformed(format!(
                "claim '{claim}' is not a representable integer: {v}"
            ))),
            other => other.to_i64(claim),
        }
    }
}

impl Claims {
    /// Expiry as Unix seconds
    #[track_caller]
    pub fn expires_at(&self) -> AuthErrorResult<i64> {
        self.exp
            .as_ref()
            .ok_or_else(|| AuthError::MissingClaim {
                claim: "exp",
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_i64("exp")
    }

    #[track_caller]
    pub fn subject_id(&self) -> AuthErrorResult<SubjectId> {
        match (&self.uid, &self.sub) {
            (Some(uid), _) => uid.to_subject_id("uid"),
            (None, Some(sub)) => sub.to_subject_id("sub"),
            (None, None) => Err(AuthError::MissingClaim {
                claim: "uid",
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

#[track_caller]
fn malformed(message: String) -> AuthError {
    AuthError::Malformed {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

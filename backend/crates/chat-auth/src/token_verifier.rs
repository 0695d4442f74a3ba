use crate::{AuthError, Claims, Result as AuthErrorResult};

use chat_core::SubjectId;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Verifies HMAC-signed bearer tokens and yields the subject id.
///
/// Pure with respect to its inputs: the secret is fixed at construction and
/// the clock is passed to [`TokenVerifier::verify`].
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Accepts HS256, HS384 and HS512 tokens signed with `secret`.
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // exp is checked in verify() against the caller's clock, and may be a string
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verify `token` as of `now` and return its subject id.
    #[track_caller]
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> AuthErrorResult<SubjectId> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::InvalidSignature {
                    location: ErrorLocation::from(Location::caller()),
                },
                ErrorKind::InvalidAlgorithm => AuthError::Malformed {
                    message: "unexpected signing algorithm".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::Malformed {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
            })?;

        let claims = token_data.claims;

        let expires_at = claims.expires_at()?;
        if expires_at < now.timestamp() {
            return Err(AuthError::Expired {
                expired_at: expires_at,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        claims.subject_id()
    }

    /// Verify against the current wall clock
    #[track_caller]
    pub fn verify_now(&self, token: &str) -> AuthErrorResult<SubjectId> {
        self.verify(token, Utc::now())
    }
}

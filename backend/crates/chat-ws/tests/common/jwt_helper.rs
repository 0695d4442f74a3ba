#![allow(dead_code)]

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TestClaims {
    uid: i64,
    exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}

/// Create a valid token for `uid`, expiring in one hour
pub fn create_test_token(uid: i64, jwt_secret: &[u8]) -> String {
    encode(
        &Header::default(),
        &TestClaims {
            uid,
            exp: now_secs() + 3600,
        },
        &EncodingKey::from_secret(jwt_secret),
    )
    .expect("Failed to encode JWT")
}

/// Create a token that expired an hour ago
pub fn create_expired_token(uid: i64, jwt_secret: &[u8]) -> String {
    encode(
        &Header::default(),
        &TestClaims {
            uid,
            exp: now_secs() - 3600,
        },
        &EncodingKey::from_secret(jwt_secret),
    )
    .expect("Failed to encode JWT")
}

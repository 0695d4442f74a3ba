#![allow(dead_code)]

//! Test infrastructure for chat-server API tests

pub mod stubs;

use crate::common::stubs::{MemoryProfiles, ScriptedAuthority};

use chat_auth::TokenVerifier;
use chat_cache::{CacheLayer, MemoryStore};
use chat_identity::{CacheTtls, IdentityResolver};
use chat_ws::{
    AppState, BroadcastDispatcher, ConnectionConfig, ConnectionLimits, ConnectionRegistry,
    Metrics, QueueCapacity, ShutdownCoordinator,
};

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    http::{Request, header},
};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-api-tests-at-least-32-bytes";

#[derive(Debug, Serialize)]
struct TestClaims {
    uid: i64,
    exp: u64,
}

/// Valid HS256 token for `uid`, expiring in one hour
pub fn create_test_token(uid: i64) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs();

    encode(
        &Header::default(),
        &TestClaims {
            uid,
            exp: now + 3600,
        },
        &EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .expect("Failed to encode JWT")
}

/// AppState over the given collaborators with an in-memory cache.
///
/// The dispatch loop is not spawned; the REST API never publishes.
pub fn create_test_app_state(
    authority: Arc<ScriptedAuthority>,
    profiles: Arc<MemoryProfiles>,
) -> AppState {
    let resolver = IdentityResolver::new(
        CacheLayer::new(Arc::new(MemoryStore::new())),
        authority,
        profiles,
        CacheTtls::default(),
    );

    let registry = ConnectionRegistry::new(ConnectionLimits { max_total: 100 });
    let metrics = Metrics::new();
    let (dispatcher, _dispatch_loop) =
        BroadcastDispatcher::new(registry.clone(), QueueCapacity::Bounded(16), metrics.clone());

    AppState {
        verifier: Arc::new(TokenVerifier::with_hs256(TEST_JWT_SECRET)),
        resolver,
        registry,
        dispatcher,
        metrics,
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig::default(),
    }
}

pub fn get_profile_request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/users/me/profile");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn get_me_request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/users/me");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn put_profile_request(token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/api/users/me/profile")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

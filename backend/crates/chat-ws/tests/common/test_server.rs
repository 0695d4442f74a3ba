#![allow(dead_code)]

use crate::common::stubs::{EmptyProfiles, FixedAuthority};

use chat_auth::TokenVerifier;
use chat_cache::{CacheLayer, MemoryStore};
use chat_identity::{CacheTtls, IdentityResolver};
use chat_ws::{
    AppState, BroadcastDispatcher, ConnectionConfig, ConnectionLimits, ConnectionRegistry,
    Metrics, QueueCapacity, ShutdownCoordinator, echo_handler, general_handler,
};

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;

/// HS256 secret shared by the test server and token helpers
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-integration-tests-min-32-bytes-long";

/// Subject known to the stub authority
pub const KNOWN_SUBJECT: i64 = 42;
pub const KNOWN_USERNAME: &str = "ann";

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub max_connections_total: usize,
    pub queue_capacity: QueueCapacity,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            max_connections_total: 100,
            queue_capacity: QueueCapacity::Bounded(64),
        }
    }
}

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default())
}

/// Must be called inside a Tokio runtime; the dispatch loop is spawned.
pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let resolver = IdentityResolver::new(
        CacheLayer::new(Arc::new(MemoryStore::new())),
        Arc::new(FixedAuthority::with_user(KNOWN_SUBJECT, KNOWN_USERNAME)),
        Arc::new(EmptyProfiles),
        CacheTtls::default(),
    );

    let registry = ConnectionRegistry::new(ConnectionLimits {
        max_total: config.max_connections_total,
    });
    let metrics = Metrics::default();
    let shutdown = ShutdownCoordinator::new();
    let (dispatcher, dispatch_loop) =
        BroadcastDispatcher::new(registry.clone(), config.queue_capacity, metrics.clone());
    tokio::spawn(dispatch_loop.run(shutdown.subscribe_guard()));

    let app_state = AppState {
        verifier: Arc::new(TokenVerifier::with_hs256(TEST_JWT_SECRET)),
        resolver,
        registry,
        dispatcher,
        metrics,
        shutdown,
        config: ConnectionConfig::default(),
    };

    let router = Router::new()
        .route("/ws", get(general_handler))
        .route("/ws/echo", get(echo_handler))
        .with_state(app_state.clone());

    let server = TestServer::builder()
        .http_transport()
        .build(router)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

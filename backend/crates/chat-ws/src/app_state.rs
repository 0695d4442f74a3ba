use crate::{BroadcastDispatcher, ConnectionConfig, ConnectionRegistry, Metrics, ShutdownCoordinator};

use chat_auth::TokenVerifier;
use chat_identity::IdentityResolver;

use std::sync::Arc;

/// Shared application state for chat and profile handlers
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<TokenVerifier>,
    pub resolver: IdentityResolver,
    pub registry: ConnectionRegistry,
    pub dispatcher: BroadcastDispatcher,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

pub mod app_state;
pub mod authentication;
pub mod broadcast_dispatcher;
pub mod connection_config;
pub mod connection_limits;
pub mod connection_registry;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod queue_capacity;
pub mod session_handle;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod transport;

pub use app_state::AppState;
pub use authentication::authenticate;
pub use broadcast_dispatcher::{BroadcastDispatcher, DispatchLoop, FanOutReport};
pub use connection_config::ConnectionConfig;
pub use connection_limits::ConnectionLimits;
pub use connection_registry::{
    ANONYMOUS_NAME_PREFIX, Admission, ConnectionRegistry, SessionEntry,
};
pub use error::{Result, WsError};
pub use handlers::echo::echo_handler;
pub use handlers::general::general_handler;
pub use metrics::Metrics;
pub use queue_capacity::QueueCapacity;
pub use session_handle::SessionHandle;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use transport::{Transport, WsTransport};

#[cfg(test)]
mod tests;

use tracing::info_span;

/// Tracing span for one chat session.
/// All log entries within the session will include these fields.
pub fn create_session_span(handle: SessionHandle, display_name: &str) -> tracing::Span {
    info_span!(
        "ws_session",
        session = %handle,
        display_name = %display_name,
    )
}

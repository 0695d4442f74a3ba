use crate::handlers::chat_session::ChatSession;
use crate::{AppState, WsTransport, authenticate, create_session_span};

use chat_core::SubjectId;

use std::sync::Arc;

use axum::{
    extract::{State, ws::WebSocketUpgrade},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use log::{debug, error, warn};
use tokio::sync::mpsc;
use tracing::Instrument;

/// General chat upgrade handler.
///
/// Anonymous callers are admitted as `Client N`. A credential that fails
/// verification is rejected with 401 before the upgrade.
pub async fn general_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    let subject_id = authenticate(&headers, &state.verifier).map_err(|e| {
        warn!("Rejected chat connection: {e}");
        state.metrics.error_occurred(e.error_code());
        StatusCode::UNAUTHORIZED
    })?;

    let identity_name = match subject_id {
        Some(subject_id) => resolve_display_name(&state, subject_id).await,
        None => None,
    };
    let anonymous = identity_name.is_none();

    let (tx, rx) = mpsc::channel(state.config.send_buffer_size.max(1));
    let transport = Arc::new(WsTransport::new(tx));

    let admission = state
        .registry
        .admit(identity_name, transport.clone())
        .await
        .map_err(|e| {
            error!("Failed to admit session: {e}");
            state.metrics.error_occurred(e.error_code());
            StatusCode::SERVICE_UNAVAILABLE
        })?;
    state.metrics.connection_established(anonymous);

    let registry = state.registry.clone();
    let metrics = state.metrics.clone();
    let handle = admission.handle;

    Ok(ws
        .on_failed_upgrade(move |e| {
            warn!("WebSocket upgrade for {handle} failed: {e}");
            metrics.connection_closed("upgrade_failed");
            tokio::spawn(async move {
                registry.remove(handle).await;
            });
        })
        .on_upgrade(move |socket| async move {
            let span = create_session_span(admission.handle, &admission.display_name);
            let shutdown_guard = state.shutdown.subscribe_guard();

            let session = ChatSession {
                handle: admission.handle,
                display_name: admission.display_name,
                transport,
                registry: state.registry.clone(),
                dispatcher: state.dispatcher.clone(),
                metrics: state.metrics.clone(),
            };

            if let Err(e) = session
                .run(socket, rx, shutdown_guard)
                .instrument(span)
                .await
            {
                debug!("Session {handle} ended with error: {e}");
            }
        }))
}

/// Username for an authenticated subject, or `None` to fall back to an
/// anonymous name when the identity cannot be resolved.
async fn resolve_display_name(state: &AppState, subject_id: SubjectId) -> Option<String> {
    match state.resolver.resolve_full(subject_id).await {
        Ok(identity) => Some(identity.username),
        Err(e) => {
            warn!("Identity for {subject_id} unavailable, admitting anonymously: {e}");
            None
        }
    }
}

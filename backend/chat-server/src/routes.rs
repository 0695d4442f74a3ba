use crate::{health, metrics_exporter};
use crate::{get_me, get_my_profile, update_my_profile};

use chat_ws::{AppState, echo_handler, general_handler};

use axum::{Router, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints.
///
/// `/metrics` is only mounted when a Prometheus handle is supplied.
pub fn build_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let mut router = Router::new()
        // WebSocket endpoints
        .route("/ws", get(general_handler))
        .route("/ws/general", get(general_handler))
        .route("/ws/echo", get(echo_handler))
        // Identity and profile API
        .route("/api/users/me", get(get_me))
        .route(
            "/api/users/me/profile",
            get(get_my_profile).put(update_my_profile),
        )
        // Health
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check));

    if let Some(handle) = metrics {
        router = router.route(
            "/metrics",
            get(move || {
                let handle = handle.clone();
                async move { metrics_exporter::render(&handle) }
            }),
        );
    }

    router.with_state(state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

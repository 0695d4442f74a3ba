use crate::error::{Result as ServerErrorResult, ServerError};

use std::panic::Location;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the process-wide Prometheus recorder.
///
/// Fails if another recorder is already installed.
#[track_caller]
pub fn install_recorder() -> ServerErrorResult<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: format!("Failed to install Prometheus recorder: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// GET /metrics - Prometheus text exposition
pub fn render(handle: &PrometheusHandle) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
        .into_response()
}

//! Authority-backed identity endpoint

use crate::{ApiResult, AuthenticatedSubject};

use chat_core::RemoteIdentity;
use chat_ws::AppState;

use axum::{Json, extract::State};

/// GET /api/users/me
///
/// Authority record only; local profile fields are served by
/// `/api/users/me/profile`.
pub async fn get_me(
    State(state): State<AppState>,
    AuthenticatedSubject(subject_id): AuthenticatedSubject,
) -> ApiResult<Json<RemoteIdentity>> {
    let identity = state.resolver.resolve_identity(subject_id).await?;
    Ok(Json(identity))
}

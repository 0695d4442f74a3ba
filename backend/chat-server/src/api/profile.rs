//! Profile REST API handlers

use crate::{ApiResult, AuthenticatedSubject};

use chat_core::{MergedIdentity, ProfileUpdate};
use chat_ws::AppState;

use axum::{Json, extract::State};

/// GET /api/users/me/profile
pub async fn get_my_profile(
    State(state): State<AppState>,
    AuthenticatedSubject(subject_id): AuthenticatedSubject,
) -> ApiResult<Json<MergedIdentity>> {
    let identity = state.resolver.resolve_full(subject_id).await?;
    Ok(Json(identity))
}

/// PUT /api/users/me/profile
///
/// Absent fields keep their stored values. Responds with the identity as
/// re-resolved after the write.
pub async fn update_my_profile(
    State(state): State<AppState>,
    AuthenticatedSubject(subject_id): AuthenticatedSubject,
    Json(update): Json<ProfileUpdate>,
) -> ApiResult<Json<MergedIdentity>> {
    let identity = state.resolver.update_profile(subject_id, &update).await?;
    log::info!("Profile updated for user {}", subject_id);
    Ok(Json(identity))
}

//! Handlers for the caller's pregnancy profile.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use mumentum_core::profile;
use mumentum_db::models::profile::EditProfile;
use mumentum_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /profile
// ---------------------------------------------------------------------------

pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::find_by_user(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No profile exists for this user yet".into()))?;

    Ok(Json(DataResponse { data: profile }))
}

// ---------------------------------------------------------------------------
// PATCH /profile
// ---------------------------------------------------------------------------

/// Merge user edits into the profile.
///
/// Only allow-listed fields are kept; other keys are dropped. The merge is
/// the same key-wise merge onboarding answers use.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<EditProfile>,
) -> AppResult<impl IntoResponse> {
    let update = profile::filter_editable(&input.updates)?;

    let updated = ProfileRepo::merge(&state.pool, auth.user_id, &update.to_json()).await?;

    tracing::info!(
        user_id = %auth.user_id,
        fields = ?update.fields().collect::<Vec<_>>(),
        "Profile updated",
    );

    Ok(Json(DataResponse { data: updated }))
}

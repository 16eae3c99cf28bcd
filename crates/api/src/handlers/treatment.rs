//! Handlers for treatment recommendations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mumentum_core::error::CoreError;
use mumentum_core::treatment::NewRecommendation;
use mumentum_core::types::DbId;
use mumentum_db::repositories::TreatmentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /treatment-recommendations
// ---------------------------------------------------------------------------

/// Recommendations not yet acknowledged and not expired, newest first.
pub async fn list_active(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let recommendations = TreatmentRepo::list_active(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse {
        data: recommendations,
    }))
}

// ---------------------------------------------------------------------------
// POST /treatment-recommendations
// ---------------------------------------------------------------------------

pub async fn create_recommendation(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<NewRecommendation>,
) -> AppResult<impl IntoResponse> {
    let input = input.validated(chrono::Utc::now())?;
    let created = TreatmentRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = %auth.user_id,
        recommendation_id = created.id,
        risk_level = %created.risk_level,
        "Treatment recommendation created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// POST /treatment-recommendations/{id}/acknowledge
// ---------------------------------------------------------------------------

pub async fn acknowledge(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let recommendation = TreatmentRepo::acknowledge(&state.pool, auth.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Treatment recommendation",
            id,
        }))?;

    tracing::info!(user_id = %auth.user_id, recommendation_id = id, "Recommendation acknowledged");

    Ok(Json(DataResponse {
        data: recommendation,
    }))
}

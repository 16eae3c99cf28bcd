//! Handlers for the daily health log.
//!
//! One entry per user per calendar day (UTC). Posting again on the same
//! day replaces that day's entry.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mumentum_core::health_tracking;
use mumentum_db::models::health_tracking::UpsertHealthEntry;
use mumentum_db::repositories::HealthTrackingRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::HistoryParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}

// ---------------------------------------------------------------------------
// POST /health-tracking
// ---------------------------------------------------------------------------

/// Validate and store today's entry.
pub async fn log_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<UpsertHealthEntry>,
) -> AppResult<impl IntoResponse> {
    health_tracking::validate_blood_pressure(
        input.blood_pressure_systolic,
        input.blood_pressure_diastolic,
    )?;
    health_tracking::validate_weight(input.weight_kg)?;
    input.symptoms = health_tracking::normalise_symptoms(&input.symptoms)?;

    let entry = HealthTrackingRepo::upsert(&state.pool, auth.user_id, today(), &input).await?;

    tracing::info!(
        user_id = %auth.user_id,
        entry_date = %entry.entry_date,
        symptom_count = entry.symptoms.len(),
        "Health entry logged",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

// ---------------------------------------------------------------------------
// GET /health-tracking/latest
// ---------------------------------------------------------------------------

/// Today's entry, or `null` when nothing was logged today.
pub async fn latest_entry(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let entry = HealthTrackingRepo::find_for_date(&state.pool, auth.user_id, today()).await?;
    Ok(Json(DataResponse { data: entry }))
}

// ---------------------------------------------------------------------------
// GET /health-tracking/history
// ---------------------------------------------------------------------------

/// Most recent entries, newest first.
pub async fn entry_history(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> AppResult<impl IntoResponse> {
    let days = health_tracking::clamp_history_days(params.days);
    let entries = HealthTrackingRepo::list_recent(&state.pool, auth.user_id, days).await?;
    Ok(Json(DataResponse { data: entries }))
}

//! Handlers for the onboarding questionnaire.
//!
//! All endpoints require authentication. Answers are projected onto the
//! caller's pregnancy profile as they are submitted, so the profile is
//! usable before the questionnaire is finished.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mumentum_core::types::DbId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /onboarding/respond`. A missing `response` is `null`.
#[derive(Debug, Deserialize)]
pub struct SubmitResponseRequest {
    pub question_id: DbId,
    #[serde(default)]
    pub response: serde_json::Value,
}

/// Body of `POST /onboarding/skip`.
#[derive(Debug, Deserialize)]
pub struct SkipQuestionRequest {
    pub question_id: DbId,
}

// ---------------------------------------------------------------------------
// GET /onboarding/questions
// ---------------------------------------------------------------------------

/// The full question catalog in presentation order.
pub async fn list_questions(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let questions = state.onboarding().catalog().await?;
    Ok(Json(DataResponse { data: questions }))
}

// ---------------------------------------------------------------------------
// GET /onboarding/next
// ---------------------------------------------------------------------------

/// The next question to present and whether onboarding is complete.
pub async fn next_question(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let progress = state.onboarding().progress(auth.user_id).await?;

    tracing::debug!(
        user_id = %auth.user_id,
        next_question_id = ?progress.question.as_ref().map(|q| q.id),
        completed = progress.completed,
        "Resolved onboarding progress",
    );

    Ok(Json(DataResponse { data: progress }))
}

// ---------------------------------------------------------------------------
// POST /onboarding/respond
// ---------------------------------------------------------------------------

/// Record an answer and merge its projection into the caller's profile.
pub async fn submit_response(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitResponseRequest>,
) -> AppResult<impl IntoResponse> {
    let submitted = state
        .onboarding()
        .submit_answer(auth.user_id, input.question_id, input.response)
        .await?;

    tracing::info!(
        user_id = %auth.user_id,
        question_id = input.question_id,
        profile_fields = submitted.profile_update.len(),
        "Onboarding response recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: submitted })))
}

// ---------------------------------------------------------------------------
// POST /onboarding/skip
// ---------------------------------------------------------------------------

/// Record an explicit skip of an optional question.
pub async fn skip_question(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SkipQuestionRequest>,
) -> AppResult<impl IntoResponse> {
    let response = state
        .onboarding()
        .skip_question(auth.user_id, input.question_id)
        .await?;

    tracing::info!(
        user_id = %auth.user_id,
        question_id = input.question_id,
        "Onboarding question skipped",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}

//! Per-user onboarding response rows.

use mumentum_core::error::CoreError;
use mumentum_core::question::{QuestionResponse, ResponseStatus};
use mumentum_core::types::{DbId, Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

use super::corrupt_row;

/// A row from the `onboarding_responses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OnboardingResponse {
    pub id: DbId,
    pub user_id: UserId,
    pub question_id: DbId,
    pub status: String,
    pub response_payload: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl OnboardingResponse {
    pub fn into_domain(self) -> Result<QuestionResponse, CoreError> {
        let status = ResponseStatus::from_str_db(&self.status)
            .map_err(|e| corrupt_row("onboarding_responses", e))?;
        Ok(QuestionResponse {
            question_id: self.question_id,
            status,
            response_payload: self.response_payload.unwrap_or(serde_json::Value::Null),
        })
    }
}

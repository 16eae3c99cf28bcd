//! Repository for the `onboarding_responses` table.

use mumentum_core::types::{DbId, UserId};
use sqlx::PgPool;

use crate::models::response::OnboardingResponse;

/// Column list for `onboarding_responses` queries.
const COLUMNS: &str = "\
    id, user_id, question_id, status, response_payload, created_at, updated_at";

pub struct ResponseRepo;

impl ResponseRepo {
    /// Every response recorded for a user.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<OnboardingResponse>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM onboarding_responses WHERE user_id = $1 ORDER BY question_id"
        );
        sqlx::query_as::<_, OnboardingResponse>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert or replace the response for (`user_id`, `question_id`).
    ///
    /// A JSON `null` payload is stored as SQL `NULL`.
    pub async fn upsert(
        pool: &PgPool,
        user_id: UserId,
        question_id: DbId,
        status: &str,
        payload: &serde_json::Value,
    ) -> Result<OnboardingResponse, sqlx::Error> {
        let query = format!(
            "INSERT INTO onboarding_responses (user_id, question_id, status, response_payload) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id, question_id) DO UPDATE SET \
                 status = EXCLUDED.status, \
                 response_payload = EXCLUDED.response_payload, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OnboardingResponse>(&query)
            .bind(user_id)
            .bind(question_id)
            .bind(status)
            .bind((!payload.is_null()).then_some(payload))
            .fetch_one(pool)
            .await
    }
}

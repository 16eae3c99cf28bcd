//! Repository for the `treatment_recommendations` table.

use mumentum_core::treatment::NewRecommendation;
use mumentum_core::types::{DbId, UserId};
use sqlx::PgPool;

use crate::models::treatment::TreatmentRecommendation;

/// Column list for `treatment_recommendations` queries.
const COLUMNS: &str = "\
    id, user_id, title, description, risk_level, category, recommended_actions, \
    acknowledged, expires_at, created_at, updated_at";

pub struct TreatmentRepo;

impl TreatmentRepo {
    /// Unacknowledged recommendations that have not expired, newest first.
    pub async fn list_active(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<TreatmentRecommendation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM treatment_recommendations \
             WHERE user_id = $1 \
               AND NOT acknowledged \
               AND (expires_at IS NULL OR expires_at > NOW()) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, TreatmentRecommendation>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert an already validated recommendation.
    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        input: &NewRecommendation,
    ) -> Result<TreatmentRecommendation, sqlx::Error> {
        let query = format!(
            "INSERT INTO treatment_recommendations \
                 (user_id, title, description, risk_level, category, recommended_actions, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TreatmentRecommendation>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.risk_level.as_str())
            .bind(&input.category)
            .bind(&input.recommended_actions)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Mark a recommendation as seen. `None` if the user has no such row.
    ///
    /// Acknowledging twice is harmless and returns the row again.
    pub async fn acknowledge(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
    ) -> Result<Option<TreatmentRecommendation>, sqlx::Error> {
        let query = format!(
            "UPDATE treatment_recommendations SET acknowledged = TRUE, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TreatmentRecommendation>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}

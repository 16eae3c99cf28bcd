//! Repository for the `baby_health_metrics` table.

use mumentum_core::types::UserId;
use sqlx::PgPool;

use crate::models::dashboard::BabyHealthMetric;

const COLUMNS: &str =
    "id, user_id, week, headline, description, focus_points, created_at, updated_at";

pub struct BabyMetricRepo;

impl BabyMetricRepo {
    /// Stored weekly focus cards in week order.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<BabyHealthMetric>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM baby_health_metrics WHERE user_id = $1 ORDER BY week ASC"
        );
        sqlx::query_as::<_, BabyHealthMetric>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}

//! Repository for the `important_notifications` table.

use mumentum_core::types::UserId;
use sqlx::PgPool;

use crate::models::dashboard::ImportantNotification;

const COLUMNS: &str = "id, user_id, title, message, severity, created_at, updated_at";

pub struct NotificationRepo;

impl NotificationRepo {
    /// Newest notifications first, at most `limit` rows.
    pub async fn list_recent(
        pool: &PgPool,
        user_id: UserId,
        limit: i64,
    ) -> Result<Vec<ImportantNotification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM important_notifications WHERE user_id = $1 \
             ORDER BY created_at DESC, id DESC LIMIT $2"
        );
        sqlx::query_as::<_, ImportantNotification>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}

//! Repository for the `action_items` table.
//!
//! Every query is scoped by `user_id`, so an id belonging to another user
//! behaves exactly like a missing one.

use chrono::NaiveDate;
use mumentum_core::types::{DbId, UserId};
use sqlx::PgPool;

use crate::models::dashboard::StoredActionItem;

/// Column list for `action_items` queries.
const COLUMNS: &str = "id, user_id, title, is_completed, due_on, created_at, updated_at";

pub struct ActionItemRepo;

impl ActionItemRepo {
    /// A user's items, soonest due first and undated items last.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<StoredActionItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM action_items WHERE user_id = $1 \
             ORDER BY due_on ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, StoredActionItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        title: &str,
        due_on: Option<NaiveDate>,
    ) -> Result<StoredActionItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO action_items (user_id, title, due_on) VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StoredActionItem>(&query)
            .bind(user_id)
            .bind(title)
            .bind(due_on)
            .fetch_one(pool)
            .await
    }

    /// Set the completion flag. `None` if the user has no such item.
    pub async fn set_completed(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
        is_completed: bool,
    ) -> Result<Option<StoredActionItem>, sqlx::Error> {
        let query = format!(
            "UPDATE action_items SET is_completed = $3, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StoredActionItem>(&query)
            .bind(id)
            .bind(user_id)
            .bind(is_completed)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, user_id: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM action_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `pregnancy_profiles` table.

use mumentum_core::types::UserId;
use sqlx::PgPool;

use crate::models::profile::PregnancyProfile;

/// Column list for `pregnancy_profiles` queries.
const COLUMNS: &str = "user_id, fields, created_at, updated_at";

pub struct ProfileRepo;

impl ProfileRepo {
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Option<PregnancyProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pregnancy_profiles WHERE user_id = $1");
        sqlx::query_as::<_, PregnancyProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Create the profile if absent, then merge `delta` into its fields.
    ///
    /// `||` replaces only the keys present in `delta`, so the merge never
    /// clobbers fields written by other writers and is idempotent.
    pub async fn merge(
        pool: &PgPool,
        user_id: UserId,
        delta: &serde_json::Value,
    ) -> Result<PregnancyProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO pregnancy_profiles (user_id, fields) \
             VALUES ($1, $2) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 fields = pregnancy_profiles.fields || EXCLUDED.fields, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PregnancyProfile>(&query)
            .bind(user_id)
            .bind(delta)
            .fetch_one(pool)
            .await
    }
}

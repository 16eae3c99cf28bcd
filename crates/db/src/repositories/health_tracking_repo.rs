//! Repository for the `health_tracking` table.

use chrono::NaiveDate;
use mumentum_core::types::UserId;
use sqlx::PgPool;

use crate::models::health_tracking::{HealthEntry, UpsertHealthEntry};

/// Column list for `health_tracking` queries.
const COLUMNS: &str = "\
    id, user_id, entry_date, blood_pressure_systolic, blood_pressure_diastolic, \
    weight_kg, symptoms, symptom_notes, mood, created_at, updated_at";

pub struct HealthTrackingRepo;

impl HealthTrackingRepo {
    /// Insert or replace the entry for (`user_id`, `date`).
    pub async fn upsert(
        pool: &PgPool,
        user_id: UserId,
        date: NaiveDate,
        input: &UpsertHealthEntry,
    ) -> Result<HealthEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO health_tracking \
                 (user_id, entry_date, blood_pressure_systolic, blood_pressure_diastolic, \
                  weight_kg, symptoms, symptom_notes, mood) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (user_id, entry_date) DO UPDATE SET \
                 blood_pressure_systolic = EXCLUDED.blood_pressure_systolic, \
                 blood_pressure_diastolic = EXCLUDED.blood_pressure_diastolic, \
                 weight_kg = EXCLUDED.weight_kg, \
                 symptoms = EXCLUDED.symptoms, \
                 symptom_notes = EXCLUDED.symptom_notes, \
                 mood = EXCLUDED.mood, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HealthEntry>(&query)
            .bind(user_id)
            .bind(date)
            .bind(input.blood_pressure_systolic)
            .bind(input.blood_pressure_diastolic)
            .bind(input.weight_kg)
            .bind(&input.symptoms)
            .bind(&input.symptom_notes)
            .bind(&input.mood)
            .fetch_one(pool)
            .await
    }

    pub async fn find_for_date(
        pool: &PgPool,
        user_id: UserId,
        date: NaiveDate,
    ) -> Result<Option<HealthEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM health_tracking WHERE user_id = $1 AND entry_date = $2"
        );
        sqlx::query_as::<_, HealthEntry>(&query)
            .bind(user_id)
            .bind(date)
            .fetch_optional(pool)
            .await
    }

    /// Most recent entries first, at most `limit` rows.
    pub async fn list_recent(
        pool: &PgPool,
        user_id: UserId,
        limit: i64,
    ) -> Result<Vec<HealthEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM health_tracking WHERE user_id = $1 \
             ORDER BY entry_date DESC LIMIT $2"
        );
        sqlx::query_as::<_, HealthEntry>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}

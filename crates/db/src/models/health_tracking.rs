//! Daily health log rows and DTOs.

use chrono::NaiveDate;
use mumentum_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `health_tracking` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HealthEntry {
    pub id: DbId,
    pub user_id: UserId,
    pub entry_date: NaiveDate,
    pub blood_pressure_systolic: Option<i32>,
    pub blood_pressure_diastolic: Option<i32>,
    pub weight_kg: Option<f64>,
    pub symptoms: Vec<String>,
    pub symptom_notes: Option<String>,
    pub mood: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for logging today's entry. Every field replaces the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertHealthEntry {
    pub blood_pressure_systolic: Option<i32>,
    pub blood_pressure_diastolic: Option<i32>,
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub symptom_notes: Option<String>,
    pub mood: Option<String>,
}

//! Pregnancy profile rows and the profile-edit DTO.

use mumentum_core::types::{Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pregnancy_profiles` table.
///
/// `fields` is a flat JSON object; see `mumentum_core::projection` for the
/// fields onboarding writes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PregnancyProfile {
    pub user_id: UserId,
    pub fields: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PregnancyProfile {
    /// The profile fields as a JSON map (empty if the column is not an object).
    pub fn field_map(&self) -> serde_json::Map<String, serde_json::Value> {
        self.fields.as_object().cloned().unwrap_or_default()
    }
}

/// DTO for the profile-edit endpoint. Keys outside the allow-list are dropped.
#[derive(Debug, Deserialize)]
pub struct EditProfile {
    pub updates: serde_json::Map<String, serde_json::Value>,
}

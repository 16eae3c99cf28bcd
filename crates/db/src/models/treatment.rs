//! Treatment recommendation rows.

use mumentum_core::types::{DbId, Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `treatment_recommendations` table.
///
/// `risk_level` is constrained in the schema to the values of
/// [`mumentum_core::treatment::RiskLevel`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TreatmentRecommendation {
    pub id: DbId,
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub risk_level: String,
    pub category: Option<String>,
    pub recommended_actions: Vec<String>,
    pub acknowledged: bool,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

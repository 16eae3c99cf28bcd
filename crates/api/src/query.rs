//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?days=` window for history endpoints. Clamped in the core layer via
/// `clamp_history_days`.
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub days: Option<i64>,
}

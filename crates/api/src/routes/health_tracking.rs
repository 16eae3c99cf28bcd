//! Route definitions for the daily health log.
//!
//! Mounted at `/health-tracking` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::health_tracking;
use crate::state::AppState;

/// ```text
/// POST   /          -> log_entry
/// GET    /latest    -> latest_entry
/// GET    /history   -> entry_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(health_tracking::log_entry))
        .route("/latest", get(health_tracking::latest_entry))
        .route("/history", get(health_tracking::entry_history))
}

pub mod action_items;
pub mod dashboard;
pub mod health;
pub mod health_tracking;
pub mod onboarding;
pub mod profile;
pub mod treatment;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /onboarding/questions                 question catalog (GET)
/// /onboarding/next                      next question + completion (GET)
/// /onboarding/respond                   submit an answer (POST)
/// /onboarding/skip                      skip an optional question (POST)
///
/// /profile                              get, merge edits (GET, PATCH)
///
/// /health-tracking                      log today's entry (POST)
/// /health-tracking/latest               today's entry (GET)
/// /health-tracking/history              recent entries (GET, ?days=)
///
/// /dashboard                            dashboard cards (GET)
///
/// /action-items                         stored checklist (GET, POST)
/// /action-items/toggle                  mark done / not done (POST)
/// /action-items/delete                  remove an item (POST)
///
/// /treatment-recommendations            open recommendations (GET, POST)
/// /treatment-recommendations/{id}/acknowledge
///                                       dismiss one (POST)
/// ```
///
/// Every route requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/onboarding", onboarding::router())
        .nest("/profile", profile::router())
        .nest("/health-tracking", health_tracking::router())
        .nest("/dashboard", dashboard::router())
        .nest("/action-items", action_items::router())
        .nest("/treatment-recommendations", treatment::router())
}

//! Route definitions for the pregnancy profile.
//!
//! Mounted at `/profile` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// ```text
/// GET    /   -> get_profile
/// PATCH  /   -> update_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(profile::get_profile).patch(profile::update_profile))
}

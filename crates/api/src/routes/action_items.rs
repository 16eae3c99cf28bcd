//! Route definitions for stored action items.
//!
//! Mounted at `/action-items` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::action_items;
use crate::state::AppState;

/// ```text
/// GET    /          -> list_items
/// POST   /          -> create_item
/// POST   /toggle    -> toggle_item
/// POST   /delete    -> delete_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(action_items::list_items).post(action_items::create_item))
        .route("/toggle", post(action_items::toggle_item))
        .route("/delete", post(action_items::delete_item))
}

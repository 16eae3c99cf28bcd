//! Mounted at `/treatment-recommendations` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::treatment;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(treatment::list_active).post(treatment::create_recommendation))
        .route("/{id}/acknowledge", post(treatment::acknowledge))
}

//! Route definitions for the onboarding questionnaire.
//!
//! Mounted at `/onboarding` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// Onboarding routes.
///
/// ```text
/// GET    /questions  -> list_questions
/// GET    /next       -> next_question
/// POST   /respond    -> submit_response
/// POST   /skip       -> skip_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(onboarding::list_questions))
        .route("/next", get(onboarding::next_question))
        .route("/respond", post(onboarding::submit_response))
        .route("/skip", post(onboarding::skip_question))
}

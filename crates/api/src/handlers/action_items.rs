//! Handlers for stored action items.
//!
//! Stored items replace the generated checklist on the dashboard as soon
//! as a user has at least one. Toggle and delete take the item id in the
//! body and act only on the caller's own items.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mumentum_core::dashboard::action_item_title;
use mumentum_core::error::CoreError;
use mumentum_core::types::DbId;
use mumentum_db::models::dashboard::{ActionItemRef, CreateActionItem, ToggleActionItem};
use mumentum_db::repositories::ActionItemRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn missing(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Action item",
        id,
    })
}

// ---------------------------------------------------------------------------
// GET /action-items
// ---------------------------------------------------------------------------

pub async fn list_items(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = ActionItemRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /action-items
// ---------------------------------------------------------------------------

pub async fn create_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateActionItem>,
) -> AppResult<impl IntoResponse> {
    let title = action_item_title(&input.title)?;
    let item = ActionItemRepo::create(&state.pool, auth.user_id, &title, input.due_on).await?;

    tracing::info!(user_id = %auth.user_id, item_id = item.id, "Action item added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

// ---------------------------------------------------------------------------
// POST /action-items/toggle
// ---------------------------------------------------------------------------

pub async fn toggle_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ToggleActionItem>,
) -> AppResult<impl IntoResponse> {
    let item = ActionItemRepo::set_completed(
        &state.pool,
        auth.user_id,
        input.item_id,
        input.is_completed,
    )
    .await?
    .ok_or_else(|| missing(input.item_id))?;

    tracing::info!(
        user_id = %auth.user_id,
        item_id = item.id,
        is_completed = item.is_completed,
        "Action item toggled",
    );

    Ok(Json(DataResponse { data: item }))
}

// ---------------------------------------------------------------------------
// POST /action-items/delete
// ---------------------------------------------------------------------------

pub async fn delete_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ActionItemRef>,
) -> AppResult<StatusCode> {
    if !ActionItemRepo::delete(&state.pool, auth.user_id, input.item_id).await? {
        return Err(missing(input.item_id));
    }

    tracing::info!(user_id = %auth.user_id, item_id = input.item_id, "Action item deleted");

    Ok(StatusCode::NO_CONTENT)
}

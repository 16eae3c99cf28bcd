//! Handler for the home dashboard.
//!
//! Users who have not finished onboarding get only a redirect hint. The
//! cards are pure templates over the stored profile, except where the user
//! has stored weekly focus, action item or notification rows; a non-empty
//! stored list replaces its generated counterpart.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use mumentum_core::dashboard::{
    self, ActionItem, Notification, StoredCards, Suggestion, WeeklyFocus,
};
use mumentum_core::types::UserId;
use mumentum_db::models::dashboard::{BabyHealthMetric, ImportantNotification, StoredActionItem};
use mumentum_db::models::profile::PregnancyProfile;
use mumentum_db::repositories::{ActionItemRepo, BabyMetricRepo, NotificationRepo, ProfileRepo};
use mumentum_db::DbPool;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Dashboard payload. Everything but the flag is omitted while onboarding
/// is incomplete.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub onboarding_required: bool,
    #[serde(flatten)]
    pub content: Option<DashboardContent>,
}

#[derive(Debug, Serialize)]
pub struct DashboardContent {
    pub profile: Option<PregnancyProfile>,
    pub nutrition_suggestions: Vec<Suggestion>,
    pub lifestyle_suggestions: Vec<Suggestion>,
    pub weekly_focus: Vec<WeeklyFocus>,
    pub action_items: Vec<ActionItem>,
    pub important_notifications: Vec<Notification>,
}

/// Most stored notifications shown at once.
const NOTIFICATION_LIMIT: i64 = 5;

async fn stored_cards(pool: &DbPool, user_id: UserId) -> AppResult<StoredCards> {
    let (metrics, items, notifications) = tokio::try_join!(
        BabyMetricRepo::list_for_user(pool, user_id),
        ActionItemRepo::list_for_user(pool, user_id),
        NotificationRepo::list_recent(pool, user_id, NOTIFICATION_LIMIT),
    )?;

    Ok(StoredCards {
        weekly_focus: metrics.into_iter().map(BabyHealthMetric::into_card).collect(),
        action_items: items.into_iter().map(StoredActionItem::into_card).collect(),
        notifications: notifications
            .into_iter()
            .map(ImportantNotification::into_card)
            .collect::<Result<_, _>>()?,
    })
}

// ---------------------------------------------------------------------------
// GET /dashboard
// ---------------------------------------------------------------------------

pub async fn get_dashboard(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    if !state.onboarding().is_complete(auth.user_id).await? {
        tracing::debug!(user_id = %auth.user_id, "Dashboard requested before onboarding finished");
        return Ok(Json(DataResponse {
            data: DashboardResponse {
                onboarding_required: true,
                content: None,
            },
        }));
    }

    let profile = ProfileRepo::find_by_user(&state.pool, auth.user_id).await?;
    let stored = stored_cards(&state.pool, auth.user_id).await?;
    tracing::debug!(
        user_id = %auth.user_id,
        stored_focus = stored.weekly_focus.len(),
        stored_items = stored.action_items.len(),
        stored_notifications = stored.notifications.len(),
        "Building dashboard",
    );

    let fields = profile.as_ref().map(PregnancyProfile::field_map);
    let cards = dashboard::build_cards(fields.as_ref(), stored, chrono::Utc::now());

    Ok(Json(DataResponse {
        data: DashboardResponse {
            onboarding_required: false,
            content: Some(DashboardContent {
                profile,
                nutrition_suggestions: cards.nutrition_suggestions,
                lifestyle_suggestions: cards.lifestyle_suggestions,
                weekly_focus: cards.weekly_focus,
                action_items: cards.action_items,
                important_notifications: cards.important_notifications,
            }),
        },
    }))
}

//! Stored dashboard card rows.
//!
//! Rows convert into the domain cards from [`mumentum_core::dashboard`] so
//! the dashboard can mix stored and generated lists.

use chrono::NaiveDate;
use mumentum_core::dashboard::{ActionItem, CardId, Notification, Severity, WeeklyFocus};
use mumentum_core::error::CoreError;
use mumentum_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::corrupt_row;

/// A row from the `action_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoredActionItem {
    pub id: DbId,
    pub user_id: UserId,
    pub title: String,
    pub is_completed: bool,
    pub due_on: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl StoredActionItem {
    pub fn into_card(self) -> ActionItem {
        ActionItem {
            id: CardId::Stored(self.id),
            title: self.title,
            is_completed: self.is_completed,
            due_on: self.due_on.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// DTO for adding an action item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActionItem {
    pub title: String,
    pub due_on: Option<NaiveDate>,
}

/// DTO for marking an action item done or not done.
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleActionItem {
    pub item_id: DbId,
    pub is_completed: bool,
}

/// DTO naming one action item.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionItemRef {
    pub item_id: DbId,
}

/// A row from the `baby_health_metrics` table: one focus card per week.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BabyHealthMetric {
    pub id: DbId,
    pub user_id: UserId,
    pub week: i32,
    pub headline: String,
    pub description: String,
    pub focus_points: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BabyHealthMetric {
    pub fn into_card(self) -> WeeklyFocus {
        WeeklyFocus {
            week: i64::from(self.week),
            headline: self.headline,
            description: self.description,
            focus_points: self.focus_points,
        }
    }
}

/// A row from the `important_notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ImportantNotification {
    pub id: DbId,
    pub user_id: UserId,
    pub title: String,
    pub message: String,
    pub severity: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ImportantNotification {
    pub fn into_card(self) -> Result<Notification, CoreError> {
        let severity = Severity::from_str_db(&self.severity)
            .map_err(|e| corrupt_row("important_notifications", e))?;
        Ok(Notification {
            id: CardId::Stored(self.id),
            title: self.title,
            message: self.message,
            severity,
            created_at: self.created_at,
        })
    }
}

//! Treatment recommendations raised for a user.
//!
//! A recommendation stays on the dashboard until the user acknowledges it or
//! its expiry passes. Creation input is checked here before it reaches the
//! database.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Longest accepted recommendation title.
pub const MAX_TITLE_CHARS: usize = 200;
/// Most recommended actions on one recommendation.
pub const MAX_ACTIONS: usize = 10;

/// Clinical urgency of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Parse a risk level string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(CoreError::Validation(format!(
                "Invalid risk level '{s}'. Must be one of: low, medium, high, critical"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// Input for a new recommendation, after [`NewRecommendation::validated`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewRecommendation {
    pub title: String,
    pub description: Option<String>,
    pub risk_level: RiskLevel,
    pub category: Option<String>,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
    pub expires_at: Option<Timestamp>,
}

impl NewRecommendation {
    /// Trim text fields, drop blank actions and reject unusable input.
    ///
    /// An expiry at or before `now` is rejected since the recommendation
    /// would never be listed.
    pub fn validated(self, now: Timestamp) -> Result<Self, CoreError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(CoreError::Validation("Title must not be empty".to_string()));
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(CoreError::Validation(format!(
                "Title must be at most {MAX_TITLE_CHARS} characters"
            )));
        }

        let recommended_actions: Vec<String> = self
            .recommended_actions
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect();
        if recommended_actions.len() > MAX_ACTIONS {
            return Err(CoreError::Validation(format!(
                "At most {MAX_ACTIONS} recommended actions are allowed, got {}",
                recommended_actions.len()
            )));
        }

        if let Some(expires_at) = self.expires_at {
            if expires_at <= now {
                return Err(CoreError::Validation(
                    "Expiry must be in the future".to_string(),
                ));
            }
        }

        Ok(Self {
            title,
            description: non_blank(self.description),
            risk_level: self.risk_level,
            category: non_blank(self.category),
            recommended_actions,
            expires_at: self.expires_at,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, Utc};

    use super::*;

    fn input() -> NewRecommendation {
        NewRecommendation {
            title: "  Check iron levels ".to_string(),
            description: Some("   ".to_string()),
            risk_level: RiskLevel::Medium,
            category: Some("Nutrition".to_string()),
            recommended_actions: vec!["Ask for a ferritin test".to_string(), " ".to_string()],
            expires_at: None,
        }
    }

    #[test]
    fn risk_level_round_trips_through_db_strings() {
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High, RiskLevel::Critical] {
            assert_eq!(RiskLevel::from_str_db(level.as_str()).unwrap(), level);
        }
        assert_matches!(RiskLevel::from_str_db("moderate"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn validation_trims_and_drops_blanks() {
        let clean = input().validated(Utc::now()).unwrap();
        assert_eq!(clean.title, "Check iron levels");
        assert_eq!(clean.description, None);
        assert_eq!(clean.recommended_actions, vec!["Ask for a ferritin test"]);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut bad = input();
        bad.title = "   ".to_string();
        assert_matches!(bad.validated(Utc::now()), Err(CoreError::Validation(_)));
    }

    #[test]
    fn past_expiry_is_rejected() {
        let now = Utc::now();
        let mut bad = input();
        bad.expires_at = Some(now - Duration::hours(1));
        assert_matches!(bad.validated(now), Err(CoreError::Validation(_)));

        let mut good = input();
        good.expires_at = Some(now + Duration::days(3));
        assert!(good.validated(now).is_ok());
    }

    #[test]
    fn too_many_actions_are_rejected() {
        let mut bad = input();
        bad.recommended_actions = (0..=MAX_ACTIONS).map(|i| format!("Step {i}")).collect();
        assert_matches!(bad.validated(Utc::now()), Err(CoreError::Validation(_)));
    }
}

//! Onboarding question catalog and per-user response records.
//!
//! The catalog is static configuration loaded from the database; responses
//! are owned by the onboarding flow and upserted per (user, question).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Response type
// ---------------------------------------------------------------------------

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Scale,
    SingleSelect,
    MultiSelect,
    FreeText,
}

impl ResponseType {
    /// Parse a response type string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "scale" => Ok(Self::Scale),
            "single_select" => Ok(Self::SingleSelect),
            "multi_select" => Ok(Self::MultiSelect),
            "free_text" => Ok(Self::FreeText),
            _ => Err(CoreError::Validation(format!(
                "Invalid response type '{s}'. Must be one of: scale, single_select, multi_select, free_text"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scale => "scale",
            Self::SingleSelect => "single_select",
            Self::MultiSelect => "multi_select",
            Self::FreeText => "free_text",
        }
    }
}

// ---------------------------------------------------------------------------
// Response status
// ---------------------------------------------------------------------------

/// Recorded state of a user's response. A missing record means "unanswered".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Answered,
    Skipped,
}

impl ResponseStatus {
    /// Parse a status string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "answered" => Ok(Self::Answered),
            "skipped" => Ok(Self::Skipped),
            _ => Err(CoreError::Validation(format!(
                "Invalid response status '{s}'. Must be one of: answered, skipped"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Answered => "answered",
            Self::Skipped => "skipped",
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog entry
// ---------------------------------------------------------------------------

/// A single entry of the ordered onboarding catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: DbId,
    /// Stable key used by dependency references and projection rules.
    pub slug: String,
    pub prompt: String,
    pub help_text: Option<String>,
    pub section: Option<String>,
    pub response_type: ResponseType,
    pub response_options: Vec<String>,
    pub is_required: bool,
    pub allow_answer_later: bool,
    /// Ascending presentation order.
    pub sequence: i32,
    pub depends_on_slug: Option<String>,
    /// Empty means any answered response satisfies the dependency.
    pub depends_on_values: Vec<String>,
}

/// A user's recorded response to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question_id: DbId,
    pub status: ResponseStatus,
    /// Raw answer, opaque except to the projector. `Null` for skips.
    pub response_payload: serde_json::Value,
}

impl QuestionResponse {
    pub fn is_answered(&self) -> bool {
        self.status == ResponseStatus::Answered
    }
}

// ---------------------------------------------------------------------------
// Payload helpers
// ---------------------------------------------------------------------------

/// String form of a scalar payload used for allow-list comparison.
///
/// Returns `None` for `null`. Integral floats render without a fraction so
/// a stored `2.0` matches an allow-listed `"2"`. Nested arrays and objects
/// compare by their compact JSON text.
pub fn payload_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(number_text(n)),
        other => Some(other.to_string()),
    }
}

// Beyond 2^53 a float no longer holds every integer exactly.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

fn number_text(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT {
                return (f as i64).to_string();
            }
        }
    }
    n.to_string()
}

/// Whether a submitted answer counts as "no answer at all".
///
/// `null`, blank strings and empty lists are empty.
pub fn is_empty_answer(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.trim().is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn response_type_round_trips_through_db_strings() {
        for ty in [
            ResponseType::Scale,
            ResponseType::SingleSelect,
            ResponseType::MultiSelect,
            ResponseType::FreeText,
        ] {
            assert_eq!(ResponseType::from_str_db(ty.as_str()).unwrap(), ty);
        }
        assert!(ResponseType::from_str_db("checkbox").is_err());
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(ResponseStatus::from_str_db("answered").is_ok());
        assert!(ResponseStatus::from_str_db("pending").is_err());
    }

    #[test]
    fn payload_text_uses_plain_scalar_forms() {
        assert_eq!(payload_text(&json!("Yes")), Some("Yes".to_string()));
        assert_eq!(payload_text(&json!(3)), Some("3".to_string()));
        assert_eq!(payload_text(&json!(true)), Some("true".to_string()));
        assert_eq!(payload_text(&json!(null)), None);
    }

    #[test]
    fn payload_text_drops_fraction_of_integral_floats() {
        assert_eq!(payload_text(&json!(2.0)), Some("2".to_string()));
        assert_eq!(payload_text(&json!(-4.0)), Some("-4".to_string()));
        assert_eq!(payload_text(&json!(2.5)), Some("2.5".to_string()));
        assert_eq!(payload_text(&json!(1e300)), Some("1e300".to_string()));
    }

    #[test]
    fn empty_answers() {
        assert!(is_empty_answer(&json!(null)));
        assert!(is_empty_answer(&json!("")));
        assert!(is_empty_answer(&json!("   ")));
        assert!(is_empty_answer(&json!([])));
        assert!(!is_empty_answer(&json!(0)));
        assert!(!is_empty_answer(&json!(false)));
        assert!(!is_empty_answer(&json!(["None"])));
    }
}

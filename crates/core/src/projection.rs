//! Projection of onboarding answers onto profile fields.
//!
//! Each question slug maps to one [`ProjectionRule`] in a static registry.
//! Rules are independent of each other; a slug with no rule projects to an
//! empty update, which keeps purely informational questions free of code.

use serde_json::Value;

use crate::profile::ProfileUpdate;

/// How a single answer turns into profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionRule {
    /// Trimmed text into one field; blank clears it.
    Text(&'static str),
    /// Parsed number into one field; unparseable clears it.
    Number(&'static str),
    /// Parsed number mirrored into `weeks_pregnant` and `current_week`.
    PregnancyWeeks,
    /// Yes/no phrase into a boolean field; ambiguous phrases become null.
    YesNo(&'static str),
    /// `has_doctor`, clearing `next_appointment` when the answer is no.
    HasDoctor,
    /// `pregnancy_status`, clearing week and planning fields it rules out.
    PregnancyStatus,
    /// Multi-select list with a `None` sentinel and custom entries.
    MultiSelect(&'static str),
    /// Trimmed text wrapped as `{ "raw": text }`.
    Structured(&'static str),
}

/// Slug to rule registry.
pub const PROJECTION_RULES: &[(&str, ProjectionRule)] = &[
    ("mama-name", ProjectionRule::Text("preferred_name")),
    ("mama-age", ProjectionRule::Number("age")),
    ("mama-region", ProjectionRule::Text("country")),
    ("pregnancy-status", ProjectionRule::PregnancyStatus),
    ("pregnancy-weeks", ProjectionRule::PregnancyWeeks),
    ("first-pregnancy", ProjectionRule::YesNo("is_first_pregnancy")),
    ("pregnancy-complications", ProjectionRule::Text("complications")),
    ("conception-window", ProjectionRule::Text("planning_window")),
    ("medical-conditions", ProjectionRule::MultiSelect("medical_conditions")),
    ("current-meds", ProjectionRule::Text("medications")),
    ("allergies", ProjectionRule::Text("allergies")),
    ("diet-style", ProjectionRule::Text("diet_style")),
    ("food-preferences", ProjectionRule::Text("food_preferences")),
    ("activity-level", ProjectionRule::Text("activity_level")),
    ("substance-use", ProjectionRule::Text("substance_use")),
    ("emotional-checkin", ProjectionRule::Text("emotional_state")),
    ("has-doctor", ProjectionRule::HasDoctor),
    ("next-appointment", ProjectionRule::Text("next_appointment")),
    ("emergency-contact", ProjectionRule::Structured("emergency_contact")),
    ("blood-group", ProjectionRule::Text("blood_group")),
];

/// Sentinel selection that overrides every other multi-select choice.
pub const NONE_SENTINEL: &str = "None";

/// Look up the rule registered for `slug`.
pub fn rule_for(slug: &str) -> Option<ProjectionRule> {
    PROJECTION_RULES
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, rule)| *rule)
}

/// Compute the profile update for an answer to the question `slug`.
///
/// Unknown slugs and `null` answers produce an empty update.
pub fn project(slug: &str, raw: &Value) -> ProfileUpdate {
    if raw.is_null() {
        return ProfileUpdate::new();
    }
    match rule_for(slug) {
        Some(rule) => rule.apply(raw),
        None => ProfileUpdate::new(),
    }
}

impl ProjectionRule {
    pub fn apply(self, raw: &Value) -> ProfileUpdate {
        let mut update = ProfileUpdate::new();
        match self {
            Self::Text(field) => update.set(field, text_or_null(raw)),
            Self::Number(field) => update.set(field, parse_number(raw)),
            Self::PregnancyWeeks => {
                let weeks = parse_number(raw);
                update.set("weeks_pregnant", weeks.clone());
                update.set("current_week", weeks);
            }
            Self::YesNo(field) => update.set(field, yes_no_value(raw)),
            Self::HasDoctor => {
                let has_doctor = parse_yes_no(raw);
                update.set("has_doctor", has_doctor);
                if has_doctor == Some(false) {
                    update.clear("next_appointment");
                }
            }
            Self::PregnancyStatus => {
                let status = text_or_null(raw);
                let lowered = status.as_str().map(str::to_lowercase).unwrap_or_default();
                if !lowered.contains("pregnan") {
                    update.clear("weeks_pregnant");
                    update.clear("current_week");
                }
                if !lowered.contains("plan") {
                    update.clear("planning_window");
                }
                update.set("pregnancy_status", status);
            }
            Self::MultiSelect(field) => update.set(field, normalise_selections(raw)),
            Self::Structured(field) => {
                let wrapped = match text_or_null(raw) {
                    Value::Null => Value::Null,
                    inner => serde_json::json!({ "raw": inner }),
                };
                update.set(field, wrapped);
            }
        }
        update
    }
}

// ---------------------------------------------------------------------------
// Value parsing
// ---------------------------------------------------------------------------

/// Trim strings; blank strings become `null`. Other values pass through.
fn text_or_null(raw: &Value) -> Value {
    match raw {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Value::Null
            } else {
                Value::String(trimmed.to_string())
            }
        }
        other => other.clone(),
    }
}

/// Parse a number from a JSON number or numeric string.
///
/// Integral values are kept as integers. Anything else, including blank
/// strings and non-finite results, yields `null`.
fn parse_number(raw: &Value) -> Value {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed.filter(|n| n.is_finite()) {
        Some(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => Value::from(n as i64),
        Some(n) => Value::from(n),
        None => Value::Null,
    }
}

/// Classify a yes/no phrase.
///
/// A leading "yes" is true; a leading "no" or any "not yet" is false;
/// everything else is ambiguous.
pub fn parse_yes_no(raw: &Value) -> Option<bool> {
    match raw {
        Value::Bool(b) => Some(*b),
        Value::String(s) => {
            let lowered = s.trim().to_lowercase();
            if lowered.starts_with("yes") {
                Some(true)
            } else if lowered.starts_with("no") || lowered.contains("not yet") {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn yes_no_value(raw: &Value) -> Value {
    parse_yes_no(raw).map_or(Value::Null, Value::Bool)
}

/// Normalise a multi-select answer into a deduplicated list or `null`.
fn normalise_selections(raw: &Value) -> Value {
    let entries: Vec<Value> = match raw {
        Value::Array(items) => items.clone(),
        Value::Null => Vec::new(),
        other => vec![other.clone()],
    };

    let selections: Vec<Value> = entries
        .iter()
        .map(text_or_null)
        .filter(|v| !v.is_null())
        .collect();

    let picked_none = selections
        .iter()
        .any(|v| v.as_str().is_some_and(|s| s.eq_ignore_ascii_case(NONE_SENTINEL)));
    if picked_none {
        return serde_json::json!([NONE_SENTINEL]);
    }

    let mut unique: Vec<Value> = Vec::with_capacity(selections.len());
    for entry in selections {
        let cleaned = match entry {
            Value::String(s) => match strip_custom_prefix(&s) {
                "" => continue,
                text => Value::String(text.to_string()),
            },
            other => other,
        };
        if !unique.contains(&cleaned) {
            unique.push(cleaned);
        }
    }

    if unique.is_empty() {
        Value::Null
    } else {
        Value::Array(unique)
    }
}

/// Unwrap `custom:` / `other:` free-text entries (case-insensitive).
fn strip_custom_prefix(entry: &str) -> &str {
    for prefix in ["custom:", "other:"] {
        if entry.len() >= prefix.len()
            && entry.is_char_boundary(prefix.len())
            && entry[..prefix.len()].eq_ignore_ascii_case(prefix)
        {
            return entry[prefix.len()..].trim();
        }
    }
    entry
}

//! Dashboard cards derived from a user's profile.
//!
//! Pure templates over the profile object: a static region playbook for
//! meal suggestions, plus lifestyle, weekly focus, action item and
//! notification cards. Cards a user has stored take precedence over the
//! generated ones, one list at a time.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Food and hydration staples for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionPlaybook {
    pub staples: &'static str,
    pub produce: &'static str,
    pub hydration: &'static str,
}

/// Playbooks keyed by normalised region name.
pub const REGION_PLAYBOOKS: &[(&str, RegionPlaybook)] = &[
    (
        "india",
        RegionPlaybook {
            staples: "mung dal khichdi, idli with sambar, warm millet rotis",
            produce: "seasonal mango, papaya, spinach, and curry leaves",
            hydration: "coconut water and jeera-infused warm water",
        },
    ),
    (
        "usa",
        RegionPlaybook {
            staples: "steel-cut oats, baked salmon, and quinoa bowls",
            produce: "berries, leafy greens, and sweet potatoes",
            hydration: "citrus-infused water and herbal teas",
        },
    ),
    (
        "uk",
        RegionPlaybook {
            staples: "porridge with seeds, lentil shepherd's pie, and hearty soups",
            produce: "root vegetables, leafy greens, and apples",
            hydration: "warm lemon water and berry infusions",
        },
    ),
    (
        "singapore",
        RegionPlaybook {
            staples: "brown rice congee, steamed fish, and tofu stir-fries",
            produce: "bok choy, papaya, and dragon fruit",
            hydration: "warm barley water and chrysanthemum tea",
        },
    ),
];

/// Region names and common aliases, mapped to a playbook key.
///
/// Multi-word aliases match as consecutive words of the region text.
pub const REGION_ALIASES: &[(&str, &str)] = &[
    ("india", "india"),
    ("usa", "usa"),
    ("us", "usa"),
    ("united states", "usa"),
    ("america", "usa"),
    ("uk", "uk"),
    ("united kingdom", "uk"),
    ("britain", "uk"),
    ("england", "uk"),
    ("scotland", "uk"),
    ("wales", "uk"),
    ("singapore", "singapore"),
];

/// Used when the profile's region matches no playbook.
pub const DEFAULT_PLAYBOOK: RegionPlaybook = RegionPlaybook {
    staples: "whole grains, gently spiced legumes, and seasonal produce from your region",
    produce: "local fruits and leafy greens rich in folate and iron",
    hydration: "warm water infusions and electrolyte-friendly drinks",
};

/// Last week shown in the weekly focus.
pub const FINAL_WEEK: i64 = 40;

/// Longest accepted title for a stored action item.
pub const MAX_ACTION_TITLE_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub id: &'static str,
    pub category: &'static str,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyFocus {
    pub week: i64,
    pub headline: String,
    pub description: String,
    pub focus_points: Vec<String>,
}

/// Card identity: a stored row id, or the fixed id of a generated card.
///
/// Serialized bare, so clients see either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CardId {
    Stored(DbId),
    Template(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionItem {
    pub id: CardId,
    pub title: String,
    pub is_completed: bool,
    pub due_on: Option<String>,
}

/// How prominently a notification card is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Important,
    Critical,
}

impl Severity {
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "info" => Ok(Self::Info),
            "important" => Ok(Self::Important),
            "critical" => Ok(Self::Critical),
            _ => Err(CoreError::Validation(format!(
                "Invalid severity '{s}'. Must be one of: info, important, critical"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Important => "important",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: CardId,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub created_at: Timestamp,
}

/// Cards persisted for a user. Any non-empty list replaces its generated
/// counterpart.
#[derive(Debug, Clone, Default)]
pub struct StoredCards {
    pub weekly_focus: Vec<WeeklyFocus>,
    pub action_items: Vec<ActionItem>,
    pub notifications: Vec<Notification>,
}

/// Everything the dashboard shows for a user who finished onboarding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCards {
    pub nutrition_suggestions: Vec<Suggestion>,
    pub lifestyle_suggestions: Vec<Suggestion>,
    pub weekly_focus: Vec<WeeklyFocus>,
    pub action_items: Vec<ActionItem>,
    pub important_notifications: Vec<Notification>,
}

/// Build every card for `profile`, preferring `stored` lists.
///
/// A missing profile yields no generated cards except the welcome
/// notification. `now` stamps generated notifications.
pub fn build_cards(
    profile: Option<&Map<String, Value>>,
    stored: StoredCards,
    now: Timestamp,
) -> DashboardCards {
    DashboardCards {
        nutrition_suggestions: profile.map(nutrition_suggestions).unwrap_or_default(),
        lifestyle_suggestions: profile.map(lifestyle_suggestions).unwrap_or_default(),
        weekly_focus: stored_or(stored.weekly_focus, || {
            profile.map(weekly_focus).unwrap_or_default()
        }),
        action_items: stored_or(stored.action_items, || {
            profile.map(action_items).unwrap_or_default()
        }),
        important_notifications: stored_or(stored.notifications, || {
            fallback_notifications(profile, now)
        }),
    }
}

fn stored_or<T>(stored: Vec<T>, generate: impl FnOnce() -> Vec<T>) -> Vec<T> {
    if stored.is_empty() {
        generate()
    } else {
        stored
    }
}

/// Trim a user-supplied action item title and check its length.
pub fn action_item_title(raw: &str) -> Result<String, CoreError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(CoreError::Validation("Action item title must not be empty".to_string()));
    }
    if title.chars().count() > MAX_ACTION_TITLE_CHARS {
        return Err(CoreError::Validation(format!(
            "Action item title must be at most {MAX_ACTION_TITLE_CHARS} characters"
        )));
    }
    Ok(title.to_string())
}

// ---------------------------------------------------------------------------
// Profile field helpers
// ---------------------------------------------------------------------------

fn text<'a>(profile: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    profile
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn number(profile: &Map<String, Value>, field: &str) -> Option<i64> {
    let parsed = match profile.get(field)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|n| *n > 0)
}

/// Split a free-text or list field into trimmed, non-empty entries.
pub fn parse_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => s
            .split([',', '\n'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Condition labels worth mentioning: `custom:` unwrapped, `None` dropped.
pub fn condition_labels(profile: &Map<String, Value>) -> Vec<String> {
    parse_list(profile.get("medical_conditions"))
        .into_iter()
        .map(|entry| {
            let stripped = entry
                .get(..7)
                .filter(|p| p.eq_ignore_ascii_case("custom:"))
                .map_or(entry.as_str(), |_| &entry[7..]);
            stripped.trim().to_string()
        })
        .filter(|entry| !entry.is_empty() && !entry.eq_ignore_ascii_case("none"))
        .collect()
}

/// Resolve a free-text region to a playbook.
///
/// The region is lowercased and split into words on any non-alphanumeric
/// character; the first alias found as whole words picks the playbook, so
/// "Ukraine" does not resolve to the UK.
pub fn playbook_for(region: Option<&str>) -> RegionPlaybook {
    let Some(region) = region else {
        return DEFAULT_PLAYBOOK;
    };
    let lowered = region.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    REGION_ALIASES
        .iter()
        .find(|(alias, _)| contains_phrase(&words, alias))
        .and_then(|(_, key)| REGION_PLAYBOOKS.iter().find(|(k, _)| k == key))
        .map_or(DEFAULT_PLAYBOOK, |(_, playbook)| *playbook)
}

fn contains_phrase(words: &[&str], phrase: &str) -> bool {
    let needle: Vec<&str> = phrase.split(' ').collect();
    words.windows(needle.len()).any(|window| window == needle.as_slice())
}

/// Render an ISO date as e.g. "3 March 2026"; other text is shown as is.
fn display_date(raw: &str) -> String {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%-d %B %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

pub fn nutrition_suggestions(profile: &Map<String, Value>) -> Vec<Suggestion> {
    let country = text(profile, "country");
    let playbook = playbook_for(country);
    let allergies = parse_list(profile.get("allergies"));
    let conditions = condition_labels(profile);

    let allergy_line = if allergies.is_empty() {
        "No allergies were noted, so we will lean into the full palette of nourishing foods in your region.".to_string()
    } else {
        format!(
            "We will steer clear of {} when suggesting recipes and swap them for gentle alternatives.",
            allergies.join(", ")
        )
    };

    let condition_line = if conditions.is_empty() {
        "Share any health conditions and we will fine-tune micronutrient support instantly.".to_string()
    } else {
        format!(
            "Because you mentioned {}, we prioritise options that support those conditions and avoid known triggers.",
            conditions.join(", ")
        )
    };

    vec![
        Suggestion {
            id: "nutrition-region-highlights",
            category: "Regional focus",
            title: format!("Comforting staples for {}", country.unwrap_or("your region")),
            summary: format!(
                "Lean into {} so meals feel familiar and balanced, paired with {} to cover iron, calcium, and folate needs.",
                playbook.staples, playbook.produce
            ),
        },
        Suggestion {
            id: "nutrition-allergy-guard",
            category: "Allergy aware",
            title: "Safe swaps personalised for you".to_string(),
            summary: allergy_line,
        },
        Suggestion {
            id: "nutrition-hydration",
            category: "Hydration & boosters",
            title: "Gentle hydration reminders".to_string(),
            summary: format!(
                "{} keep fluids up without upsetting your tummy. {condition_line}",
                capitalise(playbook.hydration)
            ),
        },
    ]
}

pub fn lifestyle_suggestions(profile: &Map<String, Value>) -> Vec<Suggestion> {
    let activity = text(profile, "activity_level").unwrap_or("a pace that works for you");
    let emotional = text(profile, "emotional_state").unwrap_or("how you are feeling today");
    let week = current_week(profile)
        .map(|w| w.to_string())
        .unwrap_or_else(|| "current".to_string());

    let appointment_line = match (has_doctor(profile), text(profile, "next_appointment")) {
        (true, Some(date)) => format!(
            "Your next appointment is on {}. Checklists and question prompts will appear a few days before.",
            display_date(date)
        ),
        (true, None) => {
            "Keep logging upcoming appointments so preparation checklists arrive in time.".to_string()
        }
        (false, _) => {
            "You noted that you are still finding a doctor. The resources tab gathers provider directories for your region.".to_string()
        }
    };

    vec![
        Suggestion {
            id: "lifestyle-movement",
            category: "Movement",
            title: "Movement that matches your energy".to_string(),
            summary: format!(
                "Since you described your activity level as {activity}, short bursts of pelvic-friendly stretches and guided breathing fit well. Impact stays aligned with week {week}."
            ),
        },
        Suggestion {
            id: "lifestyle-emotions",
            category: "Mind-body",
            title: "Emotional wellbeing nudges".to_string(),
            summary: format!(
                "Your latest emotional check-in was \"{emotional}\". Expect calming rituals, journaling prompts, and partner support ideas tuned to that feeling."
            ),
        },
        Suggestion {
            id: "lifestyle-appointments",
            category: "Care circle",
            title: "Care team coordination".to_string(),
            summary: appointment_line,
        },
    ]
}

/// Focus cards for the current week and the next one. Empty without a week.
pub fn weekly_focus(profile: &Map<String, Value>) -> Vec<WeeklyFocus> {
    let Some(week) = current_week(profile) else {
        return Vec::new();
    };
    let playbook = playbook_for(text(profile, "country"));
    let primary_produce = playbook
        .produce
        .split(',')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("seasonal produce");
    let movement_cue = text(profile, "activity_level")
        .map(|a| format!("{} movement", a.to_lowercase()))
        .unwrap_or_else(|| "gentle stretches".to_string());
    let diet = text(profile, "diet_style").unwrap_or("balanced");
    let upcoming = (week + 1).min(FINAL_WEEK);

    let appointment_point = match text(profile, "next_appointment") {
        Some(date) => format!("Prep notes for your {} appointment.", display_date(date)),
        None => "List two questions you want to discuss with your care team.".to_string(),
    };
    let mood_point = match text(profile, "emotional_state") {
        Some(state) => format!("Match your \"{state}\" check-in with a partner or journal conversation."),
        None => "Log a short emotional check-in to unlock mood-based support.".to_string(),
    };

    vec![
        WeeklyFocus {
            week,
            headline: format!("Week {week}: nourish with familiarity"),
            description: format!(
                "Lean into {} and {primary_produce} to keep energy steady with your {diet} approach.",
                playbook.staples
            ),
            focus_points: vec![
                format!("Add {primary_produce} to one meal today and pair it with a protein-rich side."),
                format!("Schedule a {movement_cue} break alongside a hydration reminder."),
            ],
        },
        WeeklyFocus {
            week: upcoming,
            headline: format!("Looking ahead to week {upcoming}"),
            description: "Capture questions, mood notes, and body signals so the upcoming week feels grounded.".to_string(),
            focus_points: vec![appointment_point, mood_point],
        },
    ]
}

pub fn action_items(profile: &Map<String, Value>) -> Vec<ActionItem> {
    let region = text(profile, "country").unwrap_or("your area");
    let conditions = condition_labels(profile);
    let mut items = Vec::new();

    if !has_doctor(profile) {
        items.push(ActionItem {
            id: CardId::Template("action-find-provider"),
            title: format!("Shortlist prenatal providers in {region}"),
            is_completed: false,
            due_on: None,
        });
    }
    if let Some(date) = text(profile, "next_appointment") {
        items.push(ActionItem {
            id: CardId::Template("action-appointment-prep"),
            title: "Prepare questions and documents for your upcoming visit".to_string(),
            is_completed: false,
            due_on: Some(date.to_string()),
        });
    }
    if !conditions.is_empty() {
        items.push(ActionItem {
            id: CardId::Template("action-condition-journal"),
            title: format!("Log symptom notes related to {}", conditions.join(", ")),
            is_completed: false,
            due_on: None,
        });
    }
    if items.is_empty() {
        items.push(ActionItem {
            id: CardId::Template("action-gratitude"),
            title: "Add one gratitude or mood entry for today".to_string(),
            is_completed: false,
            due_on: None,
        });
    }
    items.push(ActionItem {
        id: CardId::Template("action-hydration"),
        title: "Check in on hydration and aim for steady sips through the day".to_string(),
        is_completed: false,
        due_on: None,
    });
    items
}

/// Generated notification cards, used when the user has none stored.
pub fn fallback_notifications(
    profile: Option<&Map<String, Value>>,
    now: Timestamp,
) -> Vec<Notification> {
    let card = |id, title: &str, message: String, severity| Notification {
        id: CardId::Template(id),
        title: title.to_string(),
        message,
        severity,
        created_at: now,
    };

    let Some(profile) = profile else {
        return vec![card(
            "notification-welcome",
            "Welcome to Mum.entum",
            "Share a few onboarding details so we can craft timely nudges just for you.".to_string(),
            Severity::Info,
        )];
    };

    let mut cards = vec![card(
        "notification-hydration",
        "Hydration check-in",
        "Keep a refillable bottle nearby. Staying hydrated supports amniotic fluid levels and digestion.".to_string(),
        Severity::Info,
    )];
    if let Some(date) = text(profile, "next_appointment") {
        cards.push(card(
            "notification-appointment",
            "Appointment prep",
            format!("Start jotting questions for your upcoming visit on {}.", display_date(date)),
            Severity::Important,
        ));
    }
    let conditions = condition_labels(profile);
    if !conditions.is_empty() {
        cards.push(card(
            "notification-condition",
            "Condition-aware insight",
            format!(
                "Because you noted {}, we will prioritise check-ins that keep symptoms in check.",
                conditions.join(", ")
            ),
            Severity::Info,
        ));
    }
    cards
}

fn current_week(profile: &Map<String, Value>) -> Option<i64> {
    number(profile, "current_week").or_else(|| number(profile, "weeks_pregnant"))
}

fn has_doctor(profile: &Map<String, Value>) -> bool {
    profile.get("has_doctor").and_then(Value::as_bool).unwrap_or(false)
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

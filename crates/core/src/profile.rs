//! Profile field deltas and the profile-edit allow-list.
//!
//! A profile is a flat JSON object per user. Writers never replace it; they
//! submit a [`ProfileUpdate`] that names only the fields they own, and the
//! store merges it key by key.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;

/// Partial profile update: field name to new value.
///
/// A `null` value is an explicit clear, which is different from the field
/// being absent (left untouched).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProfileUpdate(BTreeMap<String, serde_json::Value>);

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `field` to `value`, overwriting any earlier entry in this delta.
    pub fn set(&mut self, field: &str, value: impl Into<serde_json::Value>) {
        self.0.insert(field.to_string(), value.into());
    }

    /// Explicitly clear `field`.
    pub fn clear(&mut self, field: &str) {
        self.0.insert(field.to_string(), serde_json::Value::Null);
    }

    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Merge this delta into an existing profile object.
    ///
    /// Keys absent from the delta keep their current value.
    pub fn apply_to(&self, profile: &mut serde_json::Map<String, serde_json::Value>) {
        for (field, value) in &self.0 {
            profile.insert(field.clone(), value.clone());
        }
    }

    /// The delta as a JSON object, ready to bind as JSONB.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(self.0.clone().into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, serde_json::Value); N]> for ProfileUpdate {
    fn from(entries: [(&str, serde_json::Value); N]) -> Self {
        let mut update = Self::new();
        for (field, value) in entries {
            update.set(field, value);
        }
        update
    }
}

// ---------------------------------------------------------------------------
// Profile-edit allow-list
// ---------------------------------------------------------------------------

/// Fields a user may edit directly from the profile screen.
pub const EDITABLE_FIELDS: &[&str] = &[
    "preferred_name",
    "baby_nickname",
    "due_date",
    "current_week",
    "age",
    "country",
    "diet_style",
    "food_preferences",
    "activity_level",
    "emotional_state",
    "allergies",
    "medical_conditions",
    "medications",
    "has_doctor",
    "next_appointment",
    "blood_group",
    "notes",
];

/// Keep only editable fields from a client-supplied object.
///
/// Unknown keys are dropped silently. A request that names no editable
/// field at all is rejected so it does not turn into an empty write.
pub fn filter_editable(
    updates: &serde_json::Map<String, serde_json::Value>,
) -> Result<ProfileUpdate, CoreError> {
    let mut filtered = ProfileUpdate::new();
    for (field, value) in updates {
        if EDITABLE_FIELDS.contains(&field.as_str()) {
            filtered.set(field, value.clone());
        }
    }

    if filtered.is_empty() {
        return Err(CoreError::Validation(format!(
            "No editable profile fields in update. Must include one of: {EDITABLE_FIELDS:?}"
        )));
    }
    Ok(filtered)
}

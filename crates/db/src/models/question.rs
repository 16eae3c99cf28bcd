//! Onboarding question catalog rows.

use mumentum_core::error::CoreError;
use mumentum_core::question::{Question, ResponseType};
use mumentum_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::corrupt_row;

/// A row from the `onboarding_questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OnboardingQuestion {
    pub id: DbId,
    pub slug: String,
    pub prompt: String,
    pub help_text: Option<String>,
    pub section: Option<String>,
    pub response_type: String,
    pub response_options: serde_json::Value,
    pub is_required: bool,
    pub allow_answer_later: bool,
    pub sequence: i32,
    pub depends_on_slug: Option<String>,
    pub depends_on_values: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl OnboardingQuestion {
    /// Convert into the domain [`Question`].
    pub fn into_domain(self) -> Result<Question, CoreError> {
        let response_type = ResponseType::from_str_db(&self.response_type)
            .map_err(|e| corrupt_row("onboarding_questions", e))?;
        let response_options: Vec<String> = serde_json::from_value(self.response_options)
            .map_err(|e| corrupt_row("onboarding_questions", e))?;

        Ok(Question {
            id: self.id,
            slug: self.slug,
            prompt: self.prompt,
            help_text: self.help_text,
            section: self.section,
            response_type,
            response_options,
            is_required: self.is_required,
            allow_answer_later: self.allow_answer_later,
            sequence: self.sequence,
            depends_on_slug: self.depends_on_slug,
            depends_on_values: self.depends_on_values,
        })
    }
}

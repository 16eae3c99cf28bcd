//! Onboarding flow: answer/skip validation and orchestration.
//!
//! [`OnboardingService`] ties the resolver and the projector to a
//! persistence port. Writes are single upserts; a response write followed by
//! a failed profile merge is reported to the caller and not rolled back.

use serde::Serialize;

use crate::error::CoreError;
use crate::profile::ProfileUpdate;
use crate::projection;
use crate::question::{is_empty_answer, Question, QuestionResponse, ResponseStatus};
use crate::resolver::Resolver;
use crate::store::OnboardingStore;
use crate::types::{DbId, UserId};

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject an empty answer to a required question.
pub fn validate_answer(question: &Question, value: &serde_json::Value) -> Result<(), CoreError> {
    if question.is_required && is_empty_answer(value) {
        return Err(CoreError::Validation(format!(
            "Response required for question '{}'",
            question.slug
        )));
    }
    Ok(())
}

/// Reject skipping a required question.
pub fn validate_skip(question: &Question) -> Result<(), CoreError> {
    if question.is_required {
        return Err(CoreError::Validation(format!(
            "Cannot skip mandatory question '{}'",
            question.slug
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Where a user stands in the onboarding flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingProgress {
    /// Next question to present, if any remain.
    pub question: Option<Question>,
    /// Whether every applicable required question is answered.
    pub completed: bool,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmittedAnswer {
    pub response: QuestionResponse,
    /// Profile fields written as a consequence of the answer.
    pub profile_update: ProfileUpdate,
}

pub struct OnboardingService<S> {
    store: S,
}

impl<S: OnboardingStore> OnboardingService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The full question catalog in presentation order.
    pub async fn catalog(&self) -> Result<Vec<Question>, CoreError> {
        self.store.fetch_question_catalog().await
    }

    /// Next question plus completion state for `user_id`.
    pub async fn progress(&self, user_id: UserId) -> Result<OnboardingProgress, CoreError> {
        let questions = self.store.fetch_question_catalog().await?;
        let responses = self.store.fetch_responses(user_id).await?;

        let completed = crate::resolver::is_onboarding_complete(&questions, &responses);
        let question = Resolver::new(&questions, &responses).next_question().cloned();

        Ok(OnboardingProgress {
            question,
            completed,
        })
    }

    /// Whether `user_id` has completed onboarding.
    pub async fn is_complete(&self, user_id: UserId) -> Result<bool, CoreError> {
        let questions = self.store.fetch_question_catalog().await?;
        let responses = self.store.fetch_responses(user_id).await?;
        Ok(crate::resolver::is_onboarding_complete(&questions, &responses))
    }

    /// Record an answer and merge its projection into the user's profile.
    pub async fn submit_answer(
        &self,
        user_id: UserId,
        question_id: DbId,
        value: serde_json::Value,
    ) -> Result<SubmittedAnswer, CoreError> {
        let question = self.find_question(question_id).await?;
        validate_answer(&question, &value)?;

        let response = self
            .store
            .upsert_response(user_id, question_id, ResponseStatus::Answered, &value)
            .await?;

        let profile_update = projection::project(&question.slug, &value);
        self.merge_profile(user_id, &profile_update).await?;

        Ok(SubmittedAnswer {
            response,
            profile_update,
        })
    }

    /// Record an explicit skip of an optional question.
    pub async fn skip_question(
        &self,
        user_id: UserId,
        question_id: DbId,
    ) -> Result<QuestionResponse, CoreError> {
        let question = self.find_question(question_id).await?;
        validate_skip(&question)?;

        self.store
            .upsert_response(
                user_id,
                question_id,
                ResponseStatus::Skipped,
                &serde_json::Value::Null,
            )
            .await
    }

    /// Merge a profile delta. Returns `false` without writing when it is empty.
    pub async fn merge_profile(
        &self,
        user_id: UserId,
        update: &ProfileUpdate,
    ) -> Result<bool, CoreError> {
        if update.is_empty() {
            return Ok(false);
        }
        self.store.upsert_profile(user_id, update).await?;
        Ok(true)
    }

    async fn find_question(&self, question_id: DbId) -> Result<Question, CoreError> {
        self.store
            .fetch_question_catalog()
            .await?
            .into_iter()
            .find(|q| q.id == question_id)
            .ok_or(CoreError::NotFound {
                entity: "OnboardingQuestion",
                id: question_id,
            })
    }
}

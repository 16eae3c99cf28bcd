//! Persistence port for the onboarding flow.
//!
//! The core never talks to a database directly. The API wires in the
//! PostgreSQL implementation from the `db` crate; tests use an in-memory one.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::profile::ProfileUpdate;
use crate::question::{Question, QuestionResponse, ResponseStatus};
use crate::types::{DbId, UserId};

/// Storage operations the onboarding flow depends on.
///
/// Implementations report every failure as [`CoreError::Infrastructure`]
/// and must not retry on their own.
#[async_trait]
pub trait OnboardingStore: Send + Sync {
    /// The full catalog, ordered by ascending `sequence`.
    async fn fetch_question_catalog(&self) -> Result<Vec<Question>, CoreError>;

    /// Every response recorded for `user_id`.
    async fn fetch_responses(&self, user_id: UserId) -> Result<Vec<QuestionResponse>, CoreError>;

    /// Insert or replace the response for (`user_id`, `question_id`).
    async fn upsert_response(
        &self,
        user_id: UserId,
        question_id: DbId,
        status: ResponseStatus,
        payload: &serde_json::Value,
    ) -> Result<QuestionResponse, CoreError>;

    /// Create the profile if absent, then merge `update` into it.
    async fn upsert_profile(&self, user_id: UserId, update: &ProfileUpdate)
        -> Result<(), CoreError>;
}

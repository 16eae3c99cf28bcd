//! PostgreSQL implementation of the onboarding persistence port.

use async_trait::async_trait;
use mumentum_core::error::CoreError;
use mumentum_core::profile::ProfileUpdate;
use mumentum_core::question::{Question, QuestionResponse, ResponseStatus};
use mumentum_core::store::OnboardingStore;
use mumentum_core::types::{DbId, UserId};
use sqlx::PgPool;

use crate::repositories::{ProfileRepo, QuestionRepo, ResponseRepo};

/// [`OnboardingStore`] backed by the repository layer.
#[derive(Clone)]
pub struct PgOnboardingStore {
    pool: PgPool,
}

impl PgOnboardingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn infrastructure(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Onboarding store query failed");
    CoreError::Infrastructure(err.to_string())
}

#[async_trait]
impl OnboardingStore for PgOnboardingStore {
    async fn fetch_question_catalog(&self) -> Result<Vec<Question>, CoreError> {
        QuestionRepo::list_ordered(&self.pool)
            .await
            .map_err(infrastructure)?
            .into_iter()
            .map(|row| row.into_domain())
            .collect()
    }

    async fn fetch_responses(&self, user_id: UserId) -> Result<Vec<QuestionResponse>, CoreError> {
        ResponseRepo::list_for_user(&self.pool, user_id)
            .await
            .map_err(infrastructure)?
            .into_iter()
            .map(|row| row.into_domain())
            .collect()
    }

    async fn upsert_response(
        &self,
        user_id: UserId,
        question_id: DbId,
        status: ResponseStatus,
        payload: &serde_json::Value,
    ) -> Result<QuestionResponse, CoreError> {
        ResponseRepo::upsert(&self.pool, user_id, question_id, status.as_str(), payload)
            .await
            .map_err(infrastructure)?
            .into_domain()
    }

    async fn upsert_profile(
        &self,
        user_id: UserId,
        update: &ProfileUpdate,
    ) -> Result<(), CoreError> {
        if update.is_empty() {
            return Ok(());
        }
        ProfileRepo::merge(&self.pool, user_id, &update.to_json())
            .await
            .map_err(infrastructure)?;
        Ok(())
    }
}

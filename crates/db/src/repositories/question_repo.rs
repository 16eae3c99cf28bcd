//! Repository for the `onboarding_questions` table.

use sqlx::PgPool;

use crate::models::question::OnboardingQuestion;

/// Column list for `onboarding_questions` queries.
const COLUMNS: &str = "\
    id, slug, prompt, help_text, section, response_type, response_options, \
    is_required, allow_answer_later, sequence, depends_on_slug, depends_on_values, \
    created_at, updated_at";

/// Read access to the question catalog.
pub struct QuestionRepo;

impl QuestionRepo {
    /// The whole catalog in presentation order.
    pub async fn list_ordered(pool: &PgPool) -> Result<Vec<OnboardingQuestion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM onboarding_questions ORDER BY sequence ASC, id ASC");
        sqlx::query_as::<_, OnboardingQuestion>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<OnboardingQuestion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM onboarding_questions WHERE slug = $1");
        sqlx::query_as::<_, OnboardingQuestion>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}

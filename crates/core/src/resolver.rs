//! Onboarding dependency resolution.
//!
//! Decides whether a user has finished onboarding and which question to
//! present next, given the catalog and the user's recorded responses.
//! Everything here is a pure function over already-fetched data.

use std::collections::HashMap;

use crate::question::{payload_text, Question, QuestionResponse, ResponseStatus};
use crate::types::DbId;

/// Catalog and responses indexed by slug for dependency lookups.
///
/// Responses whose question id is not in the catalog are ignored. Questions
/// handed out by the resolver borrow only the catalog, so they outlive the
/// response slice.
pub struct Resolver<'q, 'r> {
    questions: &'q [Question],
    by_slug: HashMap<&'q str, &'q Question>,
    responses_by_slug: HashMap<&'q str, &'r QuestionResponse>,
}

impl<'q, 'r> Resolver<'q, 'r> {
    pub fn new(questions: &'q [Question], responses: &'r [QuestionResponse]) -> Self {
        let by_slug: HashMap<&str, &Question> =
            questions.iter().map(|q| (q.slug.as_str(), q)).collect();
        let slug_by_id: HashMap<DbId, &str> =
            questions.iter().map(|q| (q.id, q.slug.as_str())).collect();

        let responses_by_slug = responses
            .iter()
            .filter_map(|r| slug_by_id.get(&r.question_id).map(|slug| (*slug, r)))
            .collect();

        Self {
            questions,
            by_slug,
            responses_by_slug,
        }
    }

    /// The recorded response for a question, if any.
    pub fn response_for(&self, question: &Question) -> Option<&'r QuestionResponse> {
        self.responses_by_slug.get(question.slug.as_str()).copied()
    }

    /// Whether `question`'s prerequisite is met.
    ///
    /// A dependency on a slug that is not in the catalog is treated as met.
    pub fn dependency_satisfied(&self, question: &Question) -> bool {
        let Some(target_slug) = question.depends_on_slug.as_deref() else {
            return true;
        };
        if !self.by_slug.contains_key(target_slug) {
            return true;
        }

        let Some(target) = self.responses_by_slug.get(target_slug) else {
            return false;
        };
        if target.status != ResponseStatus::Answered {
            return false;
        }

        if question.depends_on_values.is_empty() {
            return true;
        }

        let allowed = |text: Option<String>| {
            text.is_some_and(|t| question.depends_on_values.iter().any(|v| *v == t))
        };

        match &target.response_payload {
            serde_json::Value::Array(items) => items.iter().any(|item| allowed(payload_text(item))),
            scalar => allowed(payload_text(scalar)),
        }
    }

    /// True when every required, currently applicable question is answered.
    pub fn is_complete(&self) -> bool {
        self.questions
            .iter()
            .filter(|q| q.is_required && self.dependency_satisfied(q))
            .all(|q| self.response_for(q).is_some_and(QuestionResponse::is_answered))
    }

    /// First eligible question in ascending `sequence` order.
    ///
    /// Eligible means the dependency is met and either there is no response
    /// yet, or the question is required and was previously skipped.
    pub fn next_question(&self) -> Option<&'q Question> {
        let mut ordered: Vec<&'q Question> = self.questions.iter().collect();
        ordered.sort_by_key(|q| q.sequence);

        ordered.into_iter().find(|q| {
            if !self.dependency_satisfied(q) {
                return false;
            }
            match self.response_for(q) {
                None => true,
                Some(r) => q.is_required && r.status == ResponseStatus::Skipped,
            }
        })
    }
}

/// Whether onboarding is complete for the given responses.
///
/// A catalog without required questions is always complete.
pub fn is_onboarding_complete(questions: &[Question], responses: &[QuestionResponse]) -> bool {
    if !questions.iter().any(|q| q.is_required) {
        return true;
    }
    Resolver::new(questions, responses).is_complete()
}

/// The next question to present, or `None` when the flow is exhausted.
pub fn next_question<'q>(
    questions: &'q [Question],
    responses: &[QuestionResponse],
) -> Option<&'q Question> {
    Resolver::new(questions, responses).next_question()
}

//! AnswerStore port - per-user questionnaire answers.
//!
//! One active record per user per section. Saving a section replaces the
//! stored one.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::questionnaire::{GeneralAnswers, HealthAnswers, LifeAnswers, UserAnswers};

#[async_trait]
pub trait AnswerStore: Send + Sync {
    async fn general_answers(&self, user_id: &UserId)
        -> Result<Option<GeneralAnswers>, DomainError>;

    async fn health_answers(&self, user_id: &UserId) -> Result<Option<HealthAnswers>, DomainError>;

    async fn life_answers(&self, user_id: &UserId) -> Result<Option<LifeAnswers>, DomainError>;

    /// Ages of the user's children, empty when none were given.
    async fn kid_ages(&self, user_id: &UserId) -> Result<Vec<u32>, DomainError>;

    /// Stores every section present in `answers`, leaving absent sections
    /// untouched. Kid ages travel with the general section.
    async fn save_answers(&self, user_id: &UserId, answers: &UserAnswers)
        -> Result<(), DomainError>;
}

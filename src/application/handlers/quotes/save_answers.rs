//! SaveAnswers - Command handler for storing a user's questionnaire answers.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::questionnaire::{AnswerNormalizer, RawAnswers, UserAnswers};
use crate::ports::AnswerStore;

/// Command to save answers submitted by a client.
#[derive(Debug, Clone)]
pub struct SaveAnswersCommand {
    pub user_id: UserId,
    pub answers: RawAnswers,
}

/// Handler for saving answers.
///
/// Sections present in the payload replace the stored ones; sections left
/// out are kept.
pub struct SaveAnswersHandler {
    store: Arc<dyn AnswerStore>,
}

impl SaveAnswersHandler {
    pub fn new(store: Arc<dyn AnswerStore>) -> Self {
        Self { store }
    }

    /// Returns the normalized answers that were written.
    pub async fn handle(&self, cmd: SaveAnswersCommand) -> Result<UserAnswers, DomainError> {
        let answers = AnswerNormalizer::normalize(&cmd.answers)?;
        self.store.save_answers(&cmd.user_id, &answers).await?;

        info!(
            user_id = %cmd.user_id,
            general = answers.general.is_some(),
            health = answers.health.is_some(),
            life = answers.life.is_some(),
            "Answers saved"
        );
        Ok(answers)
    }
}

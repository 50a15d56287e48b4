//! PreviewQuotes - Quotes for raw answers without touching any store.

use std::sync::Arc;
use tracing::{debug, warn};

use super::RecommendationService;
use crate::domain::foundation::ValidationError;
use crate::domain::questionnaire::{AnswerNormalizer, RawAnswers, UserAnswers};
use crate::domain::quote::{AllQuotes, InsuranceType, QuoteOutcome};

/// Command carrying answers straight from a client, e.g. before signup.
#[derive(Debug, Clone)]
pub struct PreviewQuotesCommand {
    pub answers: RawAnswers,
}

/// Handler for anonymous quote previews.
pub struct PreviewQuotesHandler {
    service: Arc<RecommendationService>,
}

impl PreviewQuotesHandler {
    pub fn new(service: Arc<RecommendationService>) -> Self {
        Self { service }
    }

    /// Each section is normalized on its own. A section that cannot be read
    /// (non-numeric age, unknown marital status, unknown question id) fails
    /// only the categories that read it with `VALIDATION_FAILED`: general
    /// fails all three, health fails HEALTH, life fails LIFE.
    pub async fn handle(&self, cmd: PreviewQuotesCommand) -> AllQuotes {
        let raw = &cmd.answers;

        let general = match &raw.general {
            Some(section) => AnswerNormalizer::normalize_general(section).and_then(|general| {
                Ok((general, AnswerNormalizer::normalize_kid_ages(section)?))
            }),
            None => Ok((None, Vec::new())),
        };
        let (general, kid_ages) = match general {
            Ok(values) => values,
            Err(err) => {
                warn!(section = "General", error = %err, "Unreadable preview answers");
                let failed = QuoteOutcome::invalid(&err);
                return AllQuotes {
                    health: failed.clone(),
                    life: failed.clone(),
                    disability: failed,
                };
            }
        };

        let health = raw
            .health
            .as_ref()
            .map(AnswerNormalizer::normalize_health)
            .transpose()
            .map(Option::flatten);
        let life = raw
            .life
            .as_ref()
            .map(AnswerNormalizer::normalize_life)
            .transpose()
            .map(Option::flatten);

        let answers = UserAnswers {
            general,
            health: health.as_ref().ok().cloned().flatten(),
            life: life.as_ref().ok().cloned().flatten(),
            kid_ages,
        };
        debug!(
            has_general = answers.general.is_some(),
            has_health = answers.health.is_some(),
            has_life = answers.life.is_some(),
            "Previewing quotes"
        );

        let (health, life, disability) = futures::join!(
            self.outcome(InsuranceType::Health, &answers, health.err()),
            self.outcome(InsuranceType::Life, &answers, life.err()),
            self.outcome(InsuranceType::Disability, &answers, None),
        );
        AllQuotes {
            health,
            life,
            disability,
        }
    }

    async fn outcome(
        &self,
        insurance_type: InsuranceType,
        answers: &UserAnswers,
        unreadable: Option<ValidationError>,
    ) -> QuoteOutcome {
        match unreadable {
            Some(err) => {
                warn!(insurance_type = %insurance_type, error = %err, "Unreadable preview answers");
                QuoteOutcome::invalid(&err)
            }
            None => self.service.outcome(insurance_type, answers, None).await,
        }
    }
}

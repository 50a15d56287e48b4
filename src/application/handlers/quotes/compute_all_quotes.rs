//! ComputeAllQuotes - Query handler for every category of a stored user's quote.

use std::sync::Arc;
use tracing::warn;

use super::answer_loader::load_answers;
use super::RecommendationService;
use crate::domain::foundation::UserId;
use crate::domain::quote::{AllQuotes, InsuranceType, QuoteOutcome};
use crate::ports::AnswerStore;

/// Query to compute health, life and disability quotes for a user.
#[derive(Debug, Clone)]
pub struct ComputeAllQuotesQuery {
    pub user_id: UserId,
}

/// Handler for computing all quotes.
///
/// Each category loads its own answers, so a store failure only fails the
/// categories that needed the failing read.
pub struct ComputeAllQuotesHandler {
    answers: Arc<dyn AnswerStore>,
    service: Arc<RecommendationService>,
}

impl ComputeAllQuotesHandler {
    pub fn new(answers: Arc<dyn AnswerStore>, service: Arc<RecommendationService>) -> Self {
        Self { answers, service }
    }

    pub async fn handle(&self, query: ComputeAllQuotesQuery) -> AllQuotes {
        let (health, life, disability) = futures::join!(
            self.category(&query.user_id, InsuranceType::Health),
            self.category(&query.user_id, InsuranceType::Life),
            self.category(&query.user_id, InsuranceType::Disability),
        );
        AllQuotes {
            health,
            life,
            disability,
        }
    }

    async fn category(&self, user_id: &UserId, insurance_type: InsuranceType) -> QuoteOutcome {
        match load_answers(self.answers.as_ref(), user_id, insurance_type).await {
            Ok(answers) => {
                self.service
                    .outcome(insurance_type, &answers, Some(user_id))
                    .await
            }
            Err(err) => {
                warn!(
                    user_id = %user_id,
                    insurance_type = %insurance_type,
                    error = %err,
                    "Failed to load answers"
                );
                QuoteOutcome::failed(&err)
            }
        }
    }
}

//! ComputeQuote - Query handler for one category of a stored user's quote.

use std::sync::Arc;

use super::answer_loader::load_answers;
use super::RecommendationService;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::quote::{InsuranceType, Quote};
use crate::ports::AnswerStore;

/// Query to compute one quote from a user's stored answers.
#[derive(Debug, Clone)]
pub struct ComputeQuoteQuery {
    pub user_id: UserId,
    pub insurance_type: InsuranceType,
}

/// Handler for computing a single quote.
///
/// Returns `Ok(None)` when no catalog plan matches. A matched plan is saved
/// as the user's recommendation for that category.
pub struct ComputeQuoteHandler {
    answers: Arc<dyn AnswerStore>,
    service: Arc<RecommendationService>,
}

impl ComputeQuoteHandler {
    pub fn new(answers: Arc<dyn AnswerStore>, service: Arc<RecommendationService>) -> Self {
        Self { answers, service }
    }

    pub async fn handle(&self, query: ComputeQuoteQuery) -> Result<Option<Quote>, DomainError> {
        let answers = load_answers(self.answers.as_ref(), &query.user_id, query.insurance_type).await?;
        let quote = self
            .service
            .quote(query.insurance_type, &answers, Some(&query.user_id))
            .await?;
        Ok(quote)
    }
}

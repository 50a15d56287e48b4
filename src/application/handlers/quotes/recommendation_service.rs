//! RecommendationService - runs estimators and the plan matcher per category.
//!
//! Categories are computed independently. A quote backed by a catalog plan
//! is remembered for its owner, when there is one, with upsert semantics.

use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

use super::PlanMatcher;
use crate::domain::foundation::UserId;
use crate::domain::questionnaire::UserAnswers;
use crate::domain::quote::{AllQuotes, InsuranceType, Quote, QuoteError, QuoteOutcome};
use crate::domain::recommendation::{
    DisabilityEstimator, HealthInsuranceClassifier, LifeInsuranceEstimator,
};
use crate::ports::{
    CurrencyFormatter, PlanCatalogStore, Recommendation, RecommendationStore, UpsertOutcome,
};

pub struct RecommendationService {
    catalog: Arc<dyn PlanCatalogStore>,
    recommendations: Arc<dyn RecommendationStore>,
    matcher: PlanMatcher,
    classifier: OnceCell<HealthInsuranceClassifier>,
}

impl RecommendationService {
    pub fn new(
        catalog: Arc<dyn PlanCatalogStore>,
        recommendations: Arc<dyn RecommendationStore>,
        formatter: Arc<dyn CurrencyFormatter>,
    ) -> Self {
        Self {
            matcher: PlanMatcher::new(catalog.clone(), formatter),
            catalog,
            recommendations,
            classifier: OnceCell::new(),
        }
    }

    /// Computes the quote for one category.
    ///
    /// `Ok(None)` means no catalog plan matches (health only). With an
    /// `owner`, a catalog-backed quote is upserted as their recommendation.
    pub async fn quote(
        &self,
        insurance_type: InsuranceType,
        answers: &UserAnswers,
        owner: Option<&UserId>,
    ) -> Result<Option<Quote>, QuoteError> {
        let quote = match insurance_type {
            InsuranceType::Health => self.health_quote(answers).await?,
            InsuranceType::Life => Some(self.life_quote(answers).await?),
            InsuranceType::Disability => Some(self.disability_quote(answers)?),
        };

        debug!(
            insurance_type = %insurance_type,
            quoted = quote.is_some(),
            "Quote computed"
        );

        if let (Some(owner), Some(quote)) = (owner, quote.as_ref()) {
            self.remember(owner, quote).await?;
        }

        Ok(quote)
    }

    /// Computes every category concurrently; one failing never hides another.
    pub async fn quote_all(&self, answers: &UserAnswers, owner: Option<&UserId>) -> AllQuotes {
        let (health, life, disability) = futures::join!(
            self.outcome(InsuranceType::Health, answers, owner),
            self.outcome(InsuranceType::Life, answers, owner),
            self.outcome(InsuranceType::Disability, answers, owner),
        );
        AllQuotes {
            health,
            life,
            disability,
        }
    }

    /// Wraps `quote` into an outcome, logging failures.
    pub async fn outcome(
        &self,
        insurance_type: InsuranceType,
        answers: &UserAnswers,
        owner: Option<&UserId>,
    ) -> QuoteOutcome {
        let result = self.quote(insurance_type, answers, owner).await;
        log_failure(insurance_type, &result);
        QuoteOutcome::from_result(result)
    }

    async fn health_quote(&self, answers: &UserAnswers) -> Result<Option<Quote>, QuoteError> {
        let classifier = self.classifier().await?;
        let classification = classifier.classify(answers.health.as_ref())?;
        let quote = self
            .matcher
            .match_health(&classification, answers.general.as_ref())
            .await?;
        Ok(quote.map(Quote::Health))
    }

    async fn life_quote(&self, answers: &UserAnswers) -> Result<Quote, QuoteError> {
        let general = answers.general.as_ref().ok_or_else(|| {
            QuoteError::invalid_input("general answers are required for a life quote")
        })?;
        let estimate =
            LifeInsuranceEstimator::estimate(answers.life.as_ref(), Some(general), &answers.kid_ages)?;
        let quote = self
            .matcher
            .match_life(&estimate, general, &answers.kid_ages)
            .await?;
        Ok(Quote::Life(quote))
    }

    fn disability_quote(&self, answers: &UserAnswers) -> Result<Quote, QuoteError> {
        let estimate = DisabilityEstimator::estimate(answers.general.as_ref())?;
        Ok(Quote::Disability(self.matcher.format_disability(&estimate)))
    }

    /// The classifier over the full option weight table, built on first use.
    async fn classifier(&self) -> Result<&HealthInsuranceClassifier, QuoteError> {
        self.classifier
            .get_or_try_init(|| async {
                let rows = self.catalog.health_option_weights().await?;
                debug!(rows = rows.len(), "Building health classifier");
                Ok::<_, QuoteError>(HealthInsuranceClassifier::new(&rows))
            })
            .await
    }

    async fn remember(&self, owner: &UserId, quote: &Quote) -> Result<(), QuoteError> {
        let Some(plan_id) = quote.plan_id() else {
            return Ok(());
        };
        let insurance_type = quote.insurance_type();
        let recommendation = Recommendation::new(owner.clone(), insurance_type, plan_id.clone());

        match self.recommendations.upsert(&recommendation).await? {
            UpsertOutcome::Unchanged => {
                debug!(user_id = %owner, insurance_type = %insurance_type, "Recommendation unchanged");
            }
            outcome => {
                info!(
                    user_id = %owner,
                    insurance_type = %insurance_type,
                    plan_id = %plan_id,
                    outcome = ?outcome,
                    "Recommendation saved"
                );
            }
        }
        Ok(())
    }
}

fn log_failure(insurance_type: InsuranceType, result: &Result<Option<Quote>, QuoteError>) {
    match result {
        Err(err @ QuoteError::DataIntegrity(_)) => {
            error!(insurance_type = %insurance_type, error = %err, "Quote failed");
        }
        Err(err) => {
            warn!(insurance_type = %insurance_type, error = %err, "Quote failed");
        }
        Ok(_) => {}
    }
}

//! PlanMatcher - turns estimator output into a priced, formatted quote.
//!
//! Health and life are exact lookups over bucketed catalog keys. Disability
//! has no catalog; the estimate is formatted as-is.

use std::sync::Arc;
use tracing::{error, warn};

use crate::domain::catalog::{HealthPlan, HealthPlanKey, LifePlan, LifePlanKey};
use crate::domain::questionnaire::{Gender, GeneralAnswers, DEFAULT_NUM_KIDS};
use crate::domain::quote::{DisabilityQuote, HealthQuote, LifeQuote, QuoteError};
use crate::domain::recommendation::{
    DisabilityEstimate, HealthClassification, LifeEstimate, LifeInsuranceEstimator,
};
use crate::ports::{CurrencyFormatter, PlanCatalogStore};

/// Gender of the profile every life catalog is seeded for.
pub const FALLBACK_LIFE_GENDER: Gender = Gender::Female;

/// Age of the profile every life catalog is seeded for.
pub const FALLBACK_LIFE_AGE: u32 = 25;

pub struct PlanMatcher {
    catalog: Arc<dyn PlanCatalogStore>,
    formatter: Arc<dyn CurrencyFormatter>,
}

impl PlanMatcher {
    pub fn new(catalog: Arc<dyn PlanCatalogStore>, formatter: Arc<dyn CurrencyFormatter>) -> Self {
        Self { catalog, formatter }
    }

    /// Looks up the health plan for a classification and household.
    ///
    /// Without general answers the household is a single adult with no kids.
    /// Returns `None` when the catalog has no plan for the key.
    pub async fn match_health(
        &self,
        classification: &HealthClassification,
        general: Option<&GeneralAnswers>,
    ) -> Result<Option<HealthQuote>, QuoteError> {
        let has_spouse = general.map(GeneralAnswers::has_spouse).unwrap_or(false);
        let num_kids = general.map(|g| g.num_kids).unwrap_or(DEFAULT_NUM_KIDS);
        let key = HealthPlanKey::new(
            classification.plan_type,
            classification.deductible,
            has_spouse,
            num_kids,
        );

        let plan = self.catalog.find_health_plan(&key).await?;
        if plan.is_none() {
            warn!(key = %key, "No health plan in catalog for key");
        }
        Ok(plan.map(|plan| self.health_quote(plan, classification)))
    }

    /// Looks up the life plan for an estimate.
    ///
    /// When the user's own profile is not in the catalog, the default
    /// (income only) estimate is priced for the seeded fallback profile.
    ///
    /// # Errors
    ///
    /// `DataIntegrity` when the fallback profile has no plan either.
    pub async fn match_life(
        &self,
        estimate: &LifeEstimate,
        general: &GeneralAnswers,
        kid_ages: &[u32],
    ) -> Result<LifeQuote, QuoteError> {
        let key = LifePlanKey::new(estimate.term, estimate.policy_amount, general.gender, general.age);
        if let Some(plan) = self.catalog.find_life_plan(&key).await? {
            return Ok(self.life_quote(plan, estimate, false));
        }

        let fallback = LifeInsuranceEstimator::estimate(None, Some(general), kid_ages)?;
        let fallback_key = LifePlanKey::new(
            fallback.term,
            fallback.policy_amount,
            FALLBACK_LIFE_GENDER,
            FALLBACK_LIFE_AGE,
        );
        warn!(
            key = %key,
            fallback_key = %fallback_key,
            "No life plan for user profile, pricing the default profile"
        );

        match self.catalog.find_life_plan(&fallback_key).await? {
            Some(plan) => Ok(self.life_quote(plan, &fallback, true)),
            None => {
                error!(key = %fallback_key, "Default life plan missing from catalog");
                Err(QuoteError::data_integrity(format!(
                    "catalog has no life plan for the default profile {}",
                    fallback_key
                )))
            }
        }
    }

    pub fn format_disability(&self, estimate: &DisabilityEstimate) -> DisabilityQuote {
        DisabilityQuote {
            benefit_amount: self.formatter.abbreviated(estimate.benefit_amount),
            duration: estimate.duration,
            monthly: self.formatter.plain(estimate.monthly),
        }
    }

    fn health_quote(&self, plan: HealthPlan, classification: &HealthClassification) -> HealthQuote {
        HealthQuote {
            deductible: self.formatter.plain(plan.deductible),
            monthly_premium: self.formatter.plain(plan.monthly_premium),
            plan_id: plan.id,
            plan_name: plan.plan_name,
            carrier: plan.carrier,
            medal: plan.medal,
            plan_type: plan.key.plan_type,
            deductible_level: plan.key.deductible_level,
            critical_illness: classification.critical_illness,
        }
    }

    fn life_quote(&self, plan: LifePlan, estimate: &LifeEstimate, default_profile: bool) -> LifeQuote {
        LifeQuote {
            policy_amount: self
                .formatter
                .abbreviated(plan.key.policy_amount.dollars() as f64),
            monthly_premium: self.formatter.plain(plan.monthly_cost),
            term_years: plan.key.policy_term.years(),
            plan_id: plan.id,
            carrier: plan.carrier,
            needs_insurance: estimate.needs_insurance,
            default_profile,
        }
    }
}

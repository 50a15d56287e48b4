//! Disability Estimator - long-term disability benefit from income.

use serde::{Deserialize, Serialize};

use crate::domain::questionnaire::GeneralAnswers;
use crate::domain::quote::QuoteError;

/// Share of annual income the benefit replaces.
pub const BENEFIT_REPLACEMENT_RATE: f64 = 0.6;

/// Age at which benefits stop.
pub const BENEFIT_END_AGE: u32 = 65;

/// Result of a disability estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisabilityEstimate {
    /// Yearly benefit in US dollars.
    pub benefit_amount: f64,
    /// Age at which the benefit ends.
    pub duration: u32,
    /// Benefit per month.
    pub monthly: f64,
}

pub struct DisabilityEstimator;

impl DisabilityEstimator {
    /// # Errors
    ///
    /// `InvalidInput` when general answers are absent.
    pub fn estimate(general: Option<&GeneralAnswers>) -> Result<DisabilityEstimate, QuoteError> {
        let general = general.ok_or_else(|| {
            QuoteError::invalid_input("general answers are required for a disability estimate")
        })?;

        let benefit_amount = general.annual_income as f64 * BENEFIT_REPLACEMENT_RATE;
        Ok(DisabilityEstimate {
            benefit_amount,
            duration: BENEFIT_END_AGE,
            monthly: benefit_amount / 12.0,
        })
    }
}

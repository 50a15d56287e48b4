//! Life Insurance Estimator - how much term coverage a household needs.

use serde::{Deserialize, Serialize};

use super::buckets::{PolicyAmount, PolicyTerm};
use crate::domain::questionnaire::{GeneralAnswers, LifeAnswers, MaritalStatus};
use crate::domain::quote::QuoteError;

/// Coverage multiple of annual income used when no life answers exist.
pub const DEFAULT_INCOME_MULTIPLE: f64 = 10.0;

/// Age at which a child is assumed to stop depending on the household.
pub const AGE_OF_INDEPENDENCE: i64 = 22;

/// Share of income to replace for each year until the youngest child is
/// independent.
pub const INCOME_REPLACEMENT_RATE: f64 = 0.03;

/// Estimated yearly college cost per child.
pub const COLLEGE_COST_PER_YEAR: f64 = 50_000.0;

/// Years of college funded per child.
pub const COLLEGE_YEARS: f64 = 4.0;

/// Result of a life insurance estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeEstimate {
    /// True for married households or households with children.
    pub needs_insurance: bool,
    /// Coverage before snapping to a priced bucket.
    pub coverage_amount: f64,
    /// Coverage snapped to the nearest priced bucket.
    pub policy_amount: PolicyAmount,
    pub term: PolicyTerm,
    /// True when no life answers were available and income alone was used.
    pub default_path: bool,
}

/// Estimator for life insurance coverage.
pub struct LifeInsuranceEstimator;

impl LifeInsuranceEstimator {
    /// Estimates coverage from life answers, general answers and kid ages.
    ///
    /// Without life answers the coverage is ten years of income. With them:
    ///
    /// ```text
    /// income * (22 - youngest kid age) * 0.03
    ///   + other debts
    ///   + 50000 * 4 * num_kids
    ///   - (existing life insurance - investments and savings)
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidInput` when general answers are absent.
    pub fn estimate(
        life: Option<&LifeAnswers>,
        general: Option<&GeneralAnswers>,
        kid_ages: &[u32],
    ) -> Result<LifeEstimate, QuoteError> {
        let general = general.ok_or_else(|| {
            QuoteError::invalid_input("general answers are required for a life estimate")
        })?;

        let needs_insurance =
            general.marital_status == MaritalStatus::Married || general.num_kids > 0;
        let annual_income = general.annual_income as f64;

        let coverage_amount = match life {
            None => DEFAULT_INCOME_MULTIPLE * annual_income,
            Some(life) => {
                let youngest = kid_ages.iter().min().map(|age| i64::from(*age)).unwrap_or(0);
                let other_debts = life.other_debts_balance.unwrap_or(0) as f64;
                let existing_cover = life.existing_life_insurance.unwrap_or(0) as f64;
                let savings = life.balance_investings_savings.unwrap_or(0) as f64;
                let college = COLLEGE_COST_PER_YEAR * COLLEGE_YEARS * f64::from(general.num_kids);

                annual_income * (AGE_OF_INDEPENDENCE - youngest) as f64 * INCOME_REPLACEMENT_RATE
                    + other_debts
                    + college
                    - (existing_cover - savings)
            }
        };

        Ok(LifeEstimate {
            needs_insurance,
            coverage_amount,
            policy_amount: PolicyAmount::nearest(coverage_amount),
            term: PolicyTerm::TWENTY_YEARS,
            default_path: life.is_none(),
        })
    }
}

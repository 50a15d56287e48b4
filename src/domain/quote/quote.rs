//! Quote records returned to callers.
//!
//! Money fields are already formatted for display. A health or life quote
//! names the catalog plan it was priced from; a disability quote is the
//! estimate itself.

use serde::Serialize;

use super::{InsuranceType, QuoteError};
use crate::domain::catalog::MedalTier;
use crate::domain::foundation::{ErrorCode, PlanId, ValidationError};
use crate::domain::recommendation::{DeductibleLevel, PlanType};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthQuote {
    pub plan_id: PlanId,
    pub plan_name: String,
    pub carrier: String,
    pub medal: MedalTier,
    pub plan_type: PlanType,
    pub deductible_level: DeductibleLevel,
    pub critical_illness: bool,
    pub deductible: String,
    pub monthly_premium: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeQuote {
    pub plan_id: PlanId,
    pub carrier: String,
    pub needs_insurance: bool,
    pub policy_amount: String,
    pub term_years: u32,
    pub monthly_premium: String,
    /// Set when the user's own profile had no catalog row and the quote was
    /// priced on the default profile instead.
    pub default_profile: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisabilityQuote {
    pub benefit_amount: String,
    /// Age at which the benefit ends.
    pub duration: u32,
    pub monthly: String,
}

/// A quote for one insurance category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Quote {
    Health(HealthQuote),
    Life(LifeQuote),
    Disability(DisabilityQuote),
}

impl Quote {
    pub fn insurance_type(&self) -> InsuranceType {
        match self {
            Quote::Health(_) => InsuranceType::Health,
            Quote::Life(_) => InsuranceType::Life,
            Quote::Disability(_) => InsuranceType::Disability,
        }
    }

    /// The catalog plan backing this quote, if any.
    pub fn plan_id(&self) -> Option<&PlanId> {
        match self {
            Quote::Health(q) => Some(&q.plan_id),
            Quote::Life(q) => Some(&q.plan_id),
            Quote::Disability(_) => None,
        }
    }
}

/// Result of computing one category.
///
/// Categories are independent: one failing never hides the others.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuoteOutcome {
    Quoted { quote: Quote },
    /// No catalog plan matches the user's profile.
    Unavailable,
    Failed { code: ErrorCode, message: String },
}

impl QuoteOutcome {
    pub fn failed(err: &QuoteError) -> Self {
        QuoteOutcome::Failed {
            code: err.code(),
            message: err.message(),
        }
    }

    /// A category whose answer section could not be read.
    pub fn invalid(err: &ValidationError) -> Self {
        QuoteOutcome::Failed {
            code: ErrorCode::ValidationFailed,
            message: err.to_string(),
        }
    }

    pub fn from_result(result: Result<Option<Quote>, QuoteError>) -> Self {
        match result {
            Ok(Some(quote)) => QuoteOutcome::Quoted { quote },
            Ok(None) => QuoteOutcome::Unavailable,
            Err(err) => QuoteOutcome::failed(&err),
        }
    }

    pub fn quote(&self) -> Option<&Quote> {
        match self {
            QuoteOutcome::Quoted { quote } => Some(quote),
            _ => None,
        }
    }

    pub fn is_quoted(&self) -> bool {
        matches!(self, QuoteOutcome::Quoted { .. })
    }
}

/// One outcome per insurance category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllQuotes {
    #[serde(rename = "HEALTH")]
    pub health: QuoteOutcome,
    #[serde(rename = "LIFE")]
    pub life: QuoteOutcome,
    #[serde(rename = "DISABILITY")]
    pub disability: QuoteOutcome,
}

impl AllQuotes {
    pub fn get(&self, insurance_type: InsuranceType) -> &QuoteOutcome {
        match insurance_type {
            InsuranceType::Health => &self.health,
            InsuranceType::Life => &self.life,
            InsuranceType::Disability => &self.disability,
        }
    }
}

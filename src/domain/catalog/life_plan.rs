//! Priced term life plans.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::PlanId;
use crate::domain::questionnaire::Gender;
use crate::domain::recommendation::{AgeBucket, PolicyAmount, PolicyTerm};

/// Everything the life catalog is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LifePlanKey {
    pub policy_term: PolicyTerm,
    pub policy_amount: PolicyAmount,
    pub gender: Gender,
    pub age: AgeBucket,
}

impl LifePlanKey {
    pub fn new(policy_term: PolicyTerm, policy_amount: PolicyAmount, gender: Gender, age: u32) -> Self {
        Self {
            policy_term,
            policy_amount,
            gender,
            age: AgeBucket::from_age(age),
        }
    }
}

impl fmt::Display for LifePlanKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}y/{}/{}/age={}",
            self.policy_term.years(),
            self.policy_amount,
            self.gender,
            self.age.years()
        )
    }
}

/// A priced term life plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifePlan {
    pub id: PlanId,
    #[serde(flatten)]
    pub key: LifePlanKey,
    pub carrier: String,
    /// US dollars per month.
    pub monthly_cost: f64,
}

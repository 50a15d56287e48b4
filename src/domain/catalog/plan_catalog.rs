//! The full catalog snapshot as loaded from a catalog file.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{HealthOptionWeight, HealthPlan, LifePlan};
use crate::domain::foundation::ValidationError;

/// Option weights plus every priced health and life plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanCatalog {
    #[serde(default)]
    pub option_weights: Vec<HealthOptionWeight>,
    #[serde(default)]
    pub health_plans: Vec<HealthPlan>,
    #[serde(default)]
    pub life_plans: Vec<LifePlan>,
}

impl PlanCatalog {
    /// Checks that every lookup over this catalog is unambiguous.
    ///
    /// # Errors
    ///
    /// - duplicate plan id across health and life plans
    /// - two health plans (or two life plans) sharing a key
    /// - two weight rows for the same question option
    /// - a negative price
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut ids = HashSet::new();
        for id in self
            .health_plans
            .iter()
            .map(|p| &p.id)
            .chain(self.life_plans.iter().map(|p| &p.id))
        {
            if !ids.insert(id) {
                return Err(ValidationError::invalid_format(
                    "plan_id",
                    format!("duplicate plan id '{}'", id),
                ));
            }
        }

        let mut health_keys = HashSet::new();
        for plan in &self.health_plans {
            if !health_keys.insert(plan.key) {
                return Err(ValidationError::invalid_format(
                    "health_plans",
                    format!("duplicate health plan key {}", plan.key),
                ));
            }
            if plan.monthly_premium < 0.0 || plan.deductible < 0.0 {
                return Err(ValidationError::invalid_format(
                    "health_plans",
                    format!("plan '{}' has a negative price", plan.id),
                ));
            }
        }

        let mut life_keys = HashSet::new();
        for plan in &self.life_plans {
            if !life_keys.insert(plan.key) {
                return Err(ValidationError::invalid_format(
                    "life_plans",
                    format!("duplicate life plan key {}", plan.key),
                ));
            }
            if plan.monthly_cost < 0.0 {
                return Err(ValidationError::invalid_format(
                    "life_plans",
                    format!("plan '{}' has a negative price", plan.id),
                ));
            }
        }

        let mut options = HashSet::new();
        for row in &self.option_weights {
            if !options.insert((row.question, row.option.as_str())) {
                return Err(ValidationError::invalid_format(
                    "option_weights",
                    format!("duplicate weights for {} option '{}'", row.question, row.option),
                ));
            }
        }

        Ok(())
    }
}

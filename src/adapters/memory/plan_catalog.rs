//! In-memory plan catalog.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::catalog::{
    HealthOptionWeight, HealthPlan, HealthPlanKey, LifePlan, LifePlanKey, PlanCatalog,
};
use crate::domain::foundation::DomainError;
use crate::ports::PlanCatalogStore;

/// Read-only catalog indexed by plan key.
///
/// Built once from a `PlanCatalog`; later duplicates of a key win, so
/// validate the catalog first when that matters.
pub struct InMemoryPlanCatalog {
    option_weights: Vec<HealthOptionWeight>,
    health_plans: HashMap<HealthPlanKey, HealthPlan>,
    life_plans: HashMap<LifePlanKey, LifePlan>,
}

impl InMemoryPlanCatalog {
    pub fn new(catalog: PlanCatalog) -> Self {
        Self {
            option_weights: catalog.option_weights,
            health_plans: catalog
                .health_plans
                .into_iter()
                .map(|plan| (plan.key, plan))
                .collect(),
            life_plans: catalog
                .life_plans
                .into_iter()
                .map(|plan| (plan.key, plan))
                .collect(),
        }
    }

    pub fn health_plan_count(&self) -> usize {
        self.health_plans.len()
    }

    pub fn life_plan_count(&self) -> usize {
        self.life_plans.len()
    }
}

#[async_trait]
impl PlanCatalogStore for InMemoryPlanCatalog {
    async fn health_option_weights(&self) -> Result<Vec<HealthOptionWeight>, DomainError> {
        Ok(self.option_weights.clone())
    }

    async fn find_health_plan(
        &self,
        key: &HealthPlanKey,
    ) -> Result<Option<HealthPlan>, DomainError> {
        Ok(self.health_plans.get(key).cloned())
    }

    async fn find_life_plan(&self, key: &LifePlanKey) -> Result<Option<LifePlan>, DomainError> {
        Ok(self.life_plans.get(key).cloned())
    }
}

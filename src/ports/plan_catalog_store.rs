//! PlanCatalogStore port - read-only access to the plan catalog.

use async_trait::async_trait;

use crate::domain::catalog::{HealthOptionWeight, HealthPlan, HealthPlanKey, LifePlan, LifePlanKey};
use crate::domain::foundation::DomainError;

#[async_trait]
pub trait PlanCatalogStore: Send + Sync {
    /// Every health question option weight row.
    async fn health_option_weights(&self) -> Result<Vec<HealthOptionWeight>, DomainError>;

    /// Exact match on the health key, `None` when the catalog has no such plan.
    async fn find_health_plan(&self, key: &HealthPlanKey) -> Result<Option<HealthPlan>, DomainError>;

    /// Exact match on the life key, `None` when the catalog has no such plan.
    async fn find_life_plan(&self, key: &LifePlanKey) -> Result<Option<LifePlan>, DomainError>;
}

//! Catalog Module - read-only tables the recommendation is priced against.
//!
//! # Components
//!
//! - `HealthOptionWeight` - per-option weights for the health questions
//! - `HealthPlan` - priced health plan keyed by `HealthPlanKey`
//! - `LifePlan` - priced term life plan keyed by `LifePlanKey`
//! - `PlanCatalog` - the whole snapshot, with key uniqueness checks
//!
//! Keys are built only from bucketed values (`KidsBucket`, `AgeBucket`,
//! `PolicyAmount`), so every lookup is over the finite catalog key space.

mod health_plan;
mod life_plan;
mod option_weight;
mod plan_catalog;

pub use health_plan::{HealthPlan, HealthPlanKey, MedalTier};
pub use life_plan::{LifePlan, LifePlanKey};
pub use option_weight::{HealthOptionWeight, OptionWeights};
pub use plan_catalog::PlanCatalog;

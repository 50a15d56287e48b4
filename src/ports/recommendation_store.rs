//! RecommendationStore port - the plan last recommended to a user.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, PlanId, RecommendationId, Timestamp, UserId};
use crate::domain::quote::InsuranceType;

/// Reference from a user to the catalog plan recommended for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: RecommendationId,
    pub user_id: UserId,
    pub insurance_type: InsuranceType,
    pub plan_id: PlanId,
    pub generated_at: Timestamp,
}

impl Recommendation {
    pub fn new(user_id: UserId, insurance_type: InsuranceType, plan_id: PlanId) -> Self {
        Self {
            id: RecommendationId::new(),
            user_id,
            insurance_type,
            plan_id,
            generated_at: Timestamp::now(),
        }
    }
}

/// What an upsert did to the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Replaced,
    /// The stored record already pointed at the same plan.
    Unchanged,
}

/// Persistence for recommendations, one per (user, insurance type).
///
/// Concurrent upserts for the same key are last-write-wins.
#[async_trait]
pub trait RecommendationStore: Send + Sync {
    async fn upsert(&self, recommendation: &Recommendation) -> Result<UpsertOutcome, DomainError>;

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Recommendation>, DomainError>;
}

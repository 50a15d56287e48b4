//! In-memory recommendation store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::quote::InsuranceType;
use crate::ports::{Recommendation, RecommendationStore, UpsertOutcome};

/// In-memory implementation of the RecommendationStore port.
///
/// One record per (user, insurance type). Writes are serialized by the lock.
#[derive(Default)]
pub struct InMemoryRecommendationStore {
    records: RwLock<HashMap<(UserId, InsuranceType), Recommendation>>,
}

impl InMemoryRecommendationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored recommendations.
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecommendationStore for InMemoryRecommendationStore {
    async fn upsert(&self, recommendation: &Recommendation) -> Result<UpsertOutcome, DomainError> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let key = (recommendation.user_id.clone(), recommendation.insurance_type);

        let outcome = match records.get(&key) {
            Some(existing) if existing.plan_id == recommendation.plan_id => {
                return Ok(UpsertOutcome::Unchanged);
            }
            Some(_) => UpsertOutcome::Replaced,
            None => UpsertOutcome::Created,
        };
        records.insert(key, recommendation.clone());
        Ok(outcome)
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Recommendation>, DomainError> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect())
    }
}

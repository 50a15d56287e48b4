//! GetRecommendations - Query handler for a user's saved recommendations.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{Recommendation, RecommendationStore};

#[derive(Debug, Clone)]
pub struct GetRecommendationsQuery {
    pub user_id: UserId,
}

pub struct GetRecommendationsHandler {
    store: Arc<dyn RecommendationStore>,
}

impl GetRecommendationsHandler {
    pub fn new(store: Arc<dyn RecommendationStore>) -> Self {
        Self { store }
    }

    /// Recommendations ordered by insurance type.
    pub async fn handle(
        &self,
        query: GetRecommendationsQuery,
    ) -> Result<Vec<Recommendation>, DomainError> {
        let mut recommendations = self.store.find_by_user(&query.user_id).await?;
        recommendations.sort_by_key(|r| r.insurance_type);
        Ok(recommendations)
    }
}

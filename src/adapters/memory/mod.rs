//! In-memory adapters for development and tests.

mod answer_store;
mod plan_catalog;
mod recommendation_store;

pub use answer_store::InMemoryAnswerStore;
pub use plan_catalog::InMemoryPlanCatalog;
pub use recommendation_store::InMemoryRecommendationStore;

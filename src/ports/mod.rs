//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AnswerStore` - read and save a user's questionnaire answers
//! - `PlanCatalogStore` - read option weights and look up priced plans
//! - `RecommendationStore` - remember the plan recommended per category
//! - `CurrencyFormatter` - money display formatting

mod answer_store;
mod currency_formatter;
mod plan_catalog_store;
mod recommendation_store;

pub use answer_store::AnswerStore;
pub use currency_formatter::CurrencyFormatter;
pub use plan_catalog_store::PlanCatalogStore;
pub use recommendation_store::{Recommendation, RecommendationStore, UpsertOutcome};

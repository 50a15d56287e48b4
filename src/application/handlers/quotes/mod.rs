//! Quote handlers.
//!
//! - `RecommendationService` - estimators + plan matching per category
//! - `ComputeQuoteHandler` / `ComputeAllQuotesHandler` - quotes from stored answers
//! - `PreviewQuotesHandler` - quotes from raw answers, nothing stored
//! - `SaveAnswersHandler` - normalize and store answers
//! - `GetRecommendationsHandler` - read saved recommendations

mod answer_loader;
mod compute_all_quotes;
mod compute_quote;
mod get_recommendations;
mod plan_matcher;
mod preview_quotes;
mod recommendation_service;
mod save_answers;

pub use compute_all_quotes::{ComputeAllQuotesHandler, ComputeAllQuotesQuery};
pub use compute_quote::{ComputeQuoteHandler, ComputeQuoteQuery};
pub use get_recommendations::{GetRecommendationsHandler, GetRecommendationsQuery};
pub use plan_matcher::{PlanMatcher, FALLBACK_LIFE_AGE, FALLBACK_LIFE_GENDER};
pub use preview_quotes::{PreviewQuotesCommand, PreviewQuotesHandler};
pub use recommendation_service::RecommendationService;
pub use save_answers::{SaveAnswersCommand, SaveAnswersHandler};

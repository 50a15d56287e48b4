//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod quotes;

pub use quotes::{
    ComputeAllQuotesHandler, ComputeAllQuotesQuery, ComputeQuoteHandler, ComputeQuoteQuery,
    GetRecommendationsHandler, GetRecommendationsQuery, PlanMatcher, PreviewQuotesCommand,
    PreviewQuotesHandler, RecommendationService, SaveAnswersCommand, SaveAnswersHandler,
};

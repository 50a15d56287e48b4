//! Quote Module - what a caller gets back per insurance category.
//!
//! # Components
//!
//! - `InsuranceType` - HEALTH, LIFE, DISABILITY
//! - `Quote` - formatted health, life or disability quote
//! - `QuoteOutcome` - quoted, unavailable (no catalog match) or failed
//! - `AllQuotes` - one outcome per category
//! - `QuoteError` - category-scoped failures

mod errors;
mod insurance_type;
#[allow(clippy::module_inception)]
mod quote;

pub use errors::QuoteError;
pub use insurance_type::InsuranceType;
pub use quote::{AllQuotes, DisabilityQuote, HealthQuote, LifeQuote, Quote, QuoteOutcome};

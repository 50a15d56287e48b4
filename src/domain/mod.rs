//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `questionnaire` - Typed answer records and raw payload normalization
//! - `recommendation` - Pure estimators for health, life and disability coverage
//! - `catalog` - Priced plan tables and health option weights
//! - `quote` - Quote records, per-category outcomes and quote errors

pub mod catalog;
pub mod foundation;
pub mod questionnaire;
pub mod quote;
pub mod recommendation;

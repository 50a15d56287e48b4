//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - in-memory answer, catalog and recommendation stores
//! - `catalog` - catalog file loader (YAML / JSON)
//! - `currency` - US dollar formatting

pub mod catalog;
pub mod currency;
pub mod memory;

pub use catalog::{CatalogFile, CatalogFileError, CatalogFormat};
pub use currency::UsdCurrencyFormatter;
pub use memory::{InMemoryAnswerStore, InMemoryPlanCatalog, InMemoryRecommendationStore};

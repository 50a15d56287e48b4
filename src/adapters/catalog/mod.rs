//! Catalog file adapters.

mod file_loader;

pub use file_loader::{CatalogFile, CatalogFileError, CatalogFormat};

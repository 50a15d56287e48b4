//! Plan catalog configuration

use serde::Deserialize;
use std::path::Path;

use super::environment::Environment;
use super::error::ValidationError;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Where the plan catalog is loaded from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Path to a YAML or JSON catalog file
    pub path: Option<String>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    ///
    /// Production must name a catalog file; elsewhere an empty catalog is
    /// allowed.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let Some(path) = self.path.as_deref().filter(|p| !p.trim().is_empty()) else {
            if environment.is_production() {
                return Err(ValidationError::MissingRequired("catalog.path"));
            }
            return Ok(());
        };

        let supported = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if !supported {
            return Err(ValidationError::UnsupportedCatalogFormat(path.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_path(path: &str) -> CatalogConfig {
        CatalogConfig {
            path: Some(path.to_string()),
        }
    }

    #[test]
    fn test_missing_path_allowed_outside_production() {
        let config = CatalogConfig::default();
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::MissingRequired("catalog.path"))
        );
    }

    #[test]
    fn test_supported_extensions() {
        assert!(with_path("data/catalog.yaml").validate(&Environment::Production).is_ok());
        assert!(with_path("catalog.YML").validate(&Environment::Production).is_ok());
        assert!(with_path("catalog.json").validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        assert!(matches!(
            with_path("catalog.csv").validate(&Environment::Development),
            Err(ValidationError::UnsupportedCatalogFormat(_))
        ));
    }
}

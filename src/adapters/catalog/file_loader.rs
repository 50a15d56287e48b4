//! Catalog file loader.
//!
//! Reads a `PlanCatalog` from a YAML (`.yaml`, `.yml`) or JSON (`.json`)
//! file and validates it before use.

use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::info;

use crate::domain::catalog::PlanCatalog;
use crate::domain::foundation::ValidationError;

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogFileError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported catalog file extension for {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("Failed to parse YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

/// Serialization format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(CatalogFormat::Yaml),
            "json" => Some(CatalogFormat::Json),
            _ => None,
        }
    }
}

pub struct CatalogFile;

impl CatalogFile {
    /// Reads, parses and validates the catalog at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<PlanCatalog, CatalogFileError> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)
            .ok_or_else(|| CatalogFileError::UnsupportedFormat(path.display().to_string()))?;

        let contents = fs::read_to_string(path)
            .await
            .map_err(|source| CatalogFileError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let catalog = Self::parse(&contents, format)?;
        info!(
            path = %path.display(),
            option_weights = catalog.option_weights.len(),
            health_plans = catalog.health_plans.len(),
            life_plans = catalog.life_plans.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Parses and validates catalog text.
    pub fn parse(contents: &str, format: CatalogFormat) -> Result<PlanCatalog, CatalogFileError> {
        let catalog: PlanCatalog = match format {
            CatalogFormat::Yaml => serde_yaml::from_str(contents)?,
            CatalogFormat::Json => serde_json::from_str(contents)?,
        };
        catalog.validate()?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    const YAML: &str = r#"
option_weights:
  - question: q_2
    option: "Yes"
    low_deductible: 3
  - question: q_2
    option: "No"
    high_deductible: 2
health_plans:
  - id: hp-hmo-high-0
    plan_type: HMO
    deductible_level: High
    has_spouse: false
    num_kids: 0
    plan_name: Bronze HMO
    carrier: Kaiser
    medal: bronze
    monthly_premium: 289.5
    deductible: 6500
life_plans:
  - id: lp-f-25-500
    policy_term: 20
    policy_amount: 500000
    gender: female
    age: 25
    carrier: Haven Life
    monthly_cost: 19.25
"#;

    #[test]
    fn format_follows_extension() {
        assert_eq!(CatalogFormat::from_path(Path::new("c.YML")), Some(CatalogFormat::Yaml));
        assert_eq!(CatalogFormat::from_path(Path::new("c.json")), Some(CatalogFormat::Json));
        assert_eq!(CatalogFormat::from_path(Path::new("c.toml")), None);
        assert_eq!(CatalogFormat::from_path(Path::new("catalog")), None);
    }

    #[test]
    fn parses_yaml_catalog() {
        let catalog = CatalogFile::parse(YAML, CatalogFormat::Yaml).unwrap();
        assert_eq!(catalog.option_weights.len(), 2);
        assert_eq!(catalog.option_weights[0].weights.low_deductible, 3.0);
        assert_eq!(catalog.health_plans[0].plan_name, "Bronze HMO");
        assert_eq!(catalog.life_plans[0].key.policy_amount.dollars(), 500_000);
    }

    #[test]
    fn duplicate_keys_are_invalid() {
        let json = r#"{
            "life_plans": [
                { "id": "a", "policy_term": 20, "policy_amount": 250000, "gender": "male", "age": 25, "carrier": "X", "monthly_cost": 10 },
                { "id": "b", "policy_term": 20, "policy_amount": 250000, "gender": "male", "age": 25, "carrier": "Y", "monthly_cost": 11 }
            ]
        }"#;
        let err = CatalogFile::parse(json, CatalogFormat::Json).unwrap_err();
        assert!(matches!(err, CatalogFileError::Invalid(_)));
    }

    #[tokio::test]
    async fn loads_from_disk() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let catalog = CatalogFile::load(file.path()).await.unwrap();
        assert_eq!(catalog.health_plans.len(), 1);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogFile::load(dir.path().join("absent.json")).await.unwrap_err();
        assert!(matches!(err, CatalogFileError::Io { .. }));
    }

    #[tokio::test]
    async fn unknown_extension_is_rejected_before_reading() {
        let err = CatalogFile::load("catalog.csv").await.unwrap_err();
        assert!(matches!(err, CatalogFileError::UnsupportedFormat(_)));
    }
}

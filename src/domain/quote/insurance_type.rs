//! Insurance categories a quote can be produced for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Category of insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsuranceType {
    Health,
    Life,
    Disability,
}

impl InsuranceType {
    pub const ALL: [InsuranceType; 3] = [
        InsuranceType::Health,
        InsuranceType::Life,
        InsuranceType::Disability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceType::Health => "HEALTH",
            InsuranceType::Life => "LIFE",
            InsuranceType::Disability => "DISABILITY",
        }
    }

    /// Whether a successful quote is backed by a catalog plan (and so is
    /// remembered as the user's recommendation).
    pub fn is_catalog_priced(&self) -> bool {
        !matches!(self, InsuranceType::Disability)
    }
}

impl FromStr for InsuranceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HEALTH" => Ok(InsuranceType::Health),
            "LIFE" => Ok(InsuranceType::Life),
            "DISABILITY" => Ok(InsuranceType::Disability),
            other => Err(ValidationError::invalid_format(
                "insurance_type",
                format!("unknown insurance type '{}'", other),
            )),
        }
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!("health".parse::<InsuranceType>().unwrap(), InsuranceType::Health);
        assert_eq!("DISABILITY".parse::<InsuranceType>().unwrap(), InsuranceType::Disability);
        assert!("dental".parse::<InsuranceType>().is_err());
    }

    #[test]
    fn disability_is_not_catalog_priced() {
        assert!(InsuranceType::Health.is_catalog_priced());
        assert!(InsuranceType::Life.is_catalog_priced());
        assert!(!InsuranceType::Disability.is_catalog_priced());
    }

    #[test]
    fn serializes_uppercase() {
        assert_eq!(serde_json::to_string(&InsuranceType::Life).unwrap(), "\"LIFE\"");
    }
}

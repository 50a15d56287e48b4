//! General (household) questionnaire answers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Marital status as answered on the general questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::Married => "married",
            MaritalStatus::Divorced => "divorced",
            MaritalStatus::Widowed => "widowed",
        }
    }

    /// Only a married household is priced with a spouse on the plan.
    pub fn has_spouse(&self) -> bool {
        matches!(self, MaritalStatus::Married)
    }
}

impl FromStr for MaritalStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(MaritalStatus::Single),
            "married" => Ok(MaritalStatus::Married),
            "divorced" => Ok(MaritalStatus::Divorced),
            "widowed" => Ok(MaritalStatus::Widowed),
            other => Err(ValidationError::invalid_format(
                "marital_status",
                format!("unknown marital status '{}'", other),
            )),
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Self-reported overall health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthCondition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCondition::Excellent => "excellent",
            HealthCondition::Good => "good",
            HealthCondition::Fair => "fair",
            HealthCondition::Poor => "poor",
        }
    }
}

impl FromStr for HealthCondition {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "excellent" => Ok(HealthCondition::Excellent),
            "good" => Ok(HealthCondition::Good),
            "fair" => Ok(HealthCondition::Fair),
            "poor" => Ok(HealthCondition::Poor),
            other => Err(ValidationError::invalid_format(
                "health_condition",
                format!("unknown health condition '{}'", other),
            )),
        }
    }
}

/// Gender used for pricing.
///
/// "Prefer not to say" is not a pricing gender; the normalizer resolves it
/// to [`DEFAULT_GENERAL_GENDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Gender assumed for general answers when it is absent or "none".
pub const DEFAULT_GENERAL_GENDER: Gender = Gender::Male;

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(ValidationError::invalid_format(
                "gender",
                format!("unknown gender '{}'", other),
            )),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The general section of a user's questionnaire.
///
/// One active record per user; saving new answers replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralAnswers {
    pub age: u32,
    pub zipcode: Option<String>,
    pub marital_status: MaritalStatus,
    pub health_condition: Option<HealthCondition>,
    /// Whole US dollars.
    pub annual_income: i64,
    pub spouse_annual_income: Option<i64>,
    pub spouse_age: Option<u32>,
    pub num_kids: u32,
    pub gender: Gender,
}

impl GeneralAnswers {
    /// Creates general answers with the fields every estimator reads.
    pub fn new(age: u32, marital_status: MaritalStatus, annual_income: i64, num_kids: u32) -> Self {
        Self {
            age,
            zipcode: None,
            marital_status,
            health_condition: None,
            annual_income,
            spouse_annual_income: None,
            spouse_age: None,
            num_kids,
            gender: DEFAULT_GENERAL_GENDER,
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_zipcode(mut self, zipcode: impl Into<String>) -> Self {
        self.zipcode = Some(zipcode.into());
        self
    }

    pub fn with_health_condition(mut self, condition: HealthCondition) -> Self {
        self.health_condition = Some(condition);
        self
    }

    pub fn with_spouse(mut self, spouse_age: u32, spouse_annual_income: i64) -> Self {
        self.spouse_age = Some(spouse_age);
        self.spouse_annual_income = Some(spouse_annual_income);
        self
    }

    pub fn has_spouse(&self) -> bool {
        self.marital_status.has_spouse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marital_status_parses_case_insensitively() {
        assert_eq!("Married".parse::<MaritalStatus>().unwrap(), MaritalStatus::Married);
        assert_eq!(" widowed ".parse::<MaritalStatus>().unwrap(), MaritalStatus::Widowed);
    }

    #[test]
    fn marital_status_rejects_unknown_value() {
        let err = "engaged".parse::<MaritalStatus>().unwrap_err();
        assert_eq!(err.field(), "marital_status");
    }

    #[test]
    fn only_married_has_spouse() {
        assert!(MaritalStatus::Married.has_spouse());
        assert!(!MaritalStatus::Single.has_spouse());
        assert!(!MaritalStatus::Divorced.has_spouse());
        assert!(!MaritalStatus::Widowed.has_spouse());
    }

    #[test]
    fn gender_rejects_none_literal() {
        // "none" is resolved by the normalizer, not by the enum
        assert!("none".parse::<Gender>().is_err());
    }

    #[test]
    fn general_answers_default_gender_is_male() {
        let answers = GeneralAnswers::new(30, MaritalStatus::Single, 50_000, 0);
        assert_eq!(answers.gender, Gender::Male);
    }

    #[test]
    fn gender_serializes_lowercase() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"female\"");
    }
}

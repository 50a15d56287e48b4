//! Answer snapshots: the typed per-user record and the raw payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::{GeneralAnswers, HealthAnswers, LifeAnswers};

/// A snapshot of everything a user has answered.
///
/// Any section may be absent; estimators fall back to their default path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAnswers {
    pub general: Option<GeneralAnswers>,
    pub health: Option<HealthAnswers>,
    pub life: Option<LifeAnswers>,
    /// Ages of the user's children, in the order they were entered.
    #[serde(default)]
    pub kid_ages: Vec<u32>,
}

impl UserAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_general(mut self, general: GeneralAnswers) -> Self {
        self.general = Some(general);
        self
    }

    pub fn with_health(mut self, health: HealthAnswers) -> Self {
        self.health = Some(health);
        self
    }

    pub fn with_life(mut self, life: LifeAnswers) -> Self {
        self.life = Some(life);
        self
    }

    pub fn with_kid_ages(mut self, kid_ages: Vec<u32>) -> Self {
        self.kid_ages = kid_ages;
        self
    }
}

/// One questionnaire section as submitted by a client: loosely typed values
/// keyed by field name.
pub type RawSection = BTreeMap<String, Value>;

/// Questionnaire answers exactly as a client submits them.
///
/// Values may be strings, numbers, nulls or (for `kid_ages`) arrays; empty
/// strings mean "not answered".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAnswers {
    #[serde(default, alias = "General")]
    pub general: Option<RawSection>,
    #[serde(default, alias = "Health")]
    pub health: Option<RawSection>,
    #[serde(default, alias = "Life")]
    pub life: Option<RawSection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_answers_accept_capitalized_section_names() {
        let raw: RawAnswers = serde_json::from_str(
            r#"{"General": {"age": 27}, "Life": {}, "Health": {"q_1": "No"}}"#,
        )
        .unwrap();

        assert_eq!(raw.general.unwrap().get("age"), Some(&Value::from(27)));
        assert!(raw.life.unwrap().is_empty());
        assert_eq!(raw.health.unwrap().get("q_1"), Some(&Value::from("No")));
    }

    #[test]
    fn raw_answers_tolerate_missing_sections() {
        let raw: RawAnswers = serde_json::from_str("{}").unwrap();
        assert!(raw.general.is_none());
        assert!(raw.health.is_none());
        assert!(raw.life.is_none());
    }
}

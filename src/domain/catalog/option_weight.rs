//! Health question option weights.

use serde::{Deserialize, Serialize};

use crate::domain::questionnaire::HealthQuestion;

/// How strongly one answer option points at each plan feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionWeights {
    #[serde(default)]
    pub hmo: f64,
    #[serde(default)]
    pub ppo: f64,
    #[serde(default)]
    pub hsa: f64,
    #[serde(default)]
    pub high_deductible: f64,
    #[serde(default)]
    pub low_deductible: f64,
    #[serde(default)]
    pub critical_illness: f64,
}

impl OptionWeights {
    /// Adds every field of `other` to the matching field of `self`.
    pub fn accumulate(&mut self, other: &OptionWeights) {
        self.hmo += other.hmo;
        self.ppo += other.ppo;
        self.hsa += other.hsa;
        self.high_deductible += other.high_deductible;
        self.low_deductible += other.low_deductible;
        self.critical_illness += other.critical_illness;
    }
}

/// One row of the option weight table: a question, one of its options and
/// that option's weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthOptionWeight {
    pub question: HealthQuestion,
    pub option: String,
    #[serde(flatten)]
    pub weights: OptionWeights,
}

impl HealthOptionWeight {
    pub fn new(question: HealthQuestion, option: impl Into<String>, weights: OptionWeights) -> Self {
        Self {
            question,
            option: option.into(),
            weights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_sums_each_field_independently() {
        let mut total = OptionWeights::default();
        total.accumulate(&OptionWeights {
            hmo: 1.0,
            ppo: 2.0,
            hsa: 3.0,
            high_deductible: 4.0,
            low_deductible: 5.0,
            critical_illness: 6.0,
        });
        total.accumulate(&OptionWeights {
            hmo: 10.0,
            ..Default::default()
        });

        assert_eq!(total.hmo, 11.0);
        assert_eq!(total.ppo, 2.0);
        assert_eq!(total.hsa, 3.0);
        assert_eq!(total.high_deductible, 4.0);
        assert_eq!(total.low_deductible, 5.0);
        assert_eq!(total.critical_illness, 6.0);
    }

    #[test]
    fn row_deserializes_with_flattened_weights() {
        let row: HealthOptionWeight = serde_json::from_str(
            r#"{"question": "q_2", "option": "Yes", "low_deductible": 3.0, "ppo": 1.0}"#,
        )
        .unwrap();

        assert_eq!(row.question, HealthQuestion::Q2);
        assert_eq!(row.weights.low_deductible, 3.0);
        assert_eq!(row.weights.ppo, 1.0);
        assert_eq!(row.weights.hmo, 0.0);
    }
}

//! Health Insurance Classifier - plan type, deductible and critical illness.
//!
//! Each answered question contributes its option's weights. The summed
//! weights are divided by the same sums taken over the whole option table,
//! which puts every feature on a comparable 0..1 scale. A handful of answers
//! then override the ratio decision outright.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::catalog::{HealthOptionWeight, OptionWeights};
use crate::domain::foundation::ValidationError;
use crate::domain::questionnaire::{HealthAnswers, HealthQuestion};
use crate::domain::quote::QuoteError;

/// Critical illness cover is recommended at or above this ratio.
pub const CRITICAL_ILLNESS_THRESHOLD: f64 = 0.33;

/// q_2 answer that forces a low deductible.
pub const EXPECTS_MAJOR_CARE: &str = "Yes";

/// q_5, q_6 and q_7 answers that together force an HMO.
pub const NO_CHANCE: &str = "No chance";
pub const ANNUAL_PHYSICAL_ONLY: &str = "Never or just for my annual physical";
pub const WAITS_IT_OUT: &str = "Drink some tea, it'll pass";

/// q_11 answers that force a PPO.
pub const WANTS_ANY_DOCTOR: &str = "Convenient time with any doctor";
pub const WANTS_SECOND_OPINIONS: &str = "I love second opinions";

/// Health plan network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlanType {
    #[serde(rename = "HMO")]
    Hmo,
    #[serde(rename = "PPO")]
    Ppo,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Hmo => "HMO",
            PlanType::Ppo => "PPO",
        }
    }
}

impl FromStr for PlanType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HMO" => Ok(PlanType::Hmo),
            "PPO" => Ok(PlanType::Ppo),
            other => Err(ValidationError::invalid_format(
                "plan_type",
                format!("unknown plan type '{}'", other),
            )),
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Deductible tier of a health plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeductibleLevel {
    High,
    Low,
}

impl DeductibleLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeductibleLevel::High => "High",
            DeductibleLevel::Low => "Low",
        }
    }
}

impl fmt::Display for DeductibleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Plan type assumed without health answers.
pub const DEFAULT_PLAN_TYPE: PlanType = PlanType::Hmo;

/// Deductible assumed without health answers.
pub const DEFAULT_DEDUCTIBLE: DeductibleLevel = DeductibleLevel::High;

/// Answer weight totals divided by option table totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthRatios {
    pub hmo: f64,
    pub ppo: f64,
    /// Computed for completeness; no decision reads it.
    pub hsa: f64,
    pub high_deductible: f64,
    pub low_deductible: f64,
    pub critical_illness: f64,
}

impl HealthRatios {
    fn between(totals: &OptionWeights, denominators: &OptionWeights) -> Self {
        Self {
            hmo: ratio(totals.hmo, denominators.hmo),
            ppo: ratio(totals.ppo, denominators.ppo),
            hsa: ratio(totals.hsa, denominators.hsa),
            high_deductible: ratio(totals.high_deductible, denominators.high_deductible),
            low_deductible: ratio(totals.low_deductible, denominators.low_deductible),
            critical_illness: ratio(totals.critical_illness, denominators.critical_illness),
        }
    }
}

fn ratio(total: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        total / denominator
    }
}

/// Output of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthClassification {
    pub plan_type: PlanType,
    pub deductible: DeductibleLevel,
    pub critical_illness: bool,
    /// `None` on the default path.
    pub ratios: Option<HealthRatios>,
}

impl HealthClassification {
    /// Classification used when the user gave no health answers.
    pub fn default_path() -> Self {
        Self {
            plan_type: DEFAULT_PLAN_TYPE,
            deductible: DEFAULT_DEDUCTIBLE,
            critical_illness: false,
            ratios: None,
        }
    }
}

/// Classifier built over the full option weight table.
pub struct HealthInsuranceClassifier {
    denominators: OptionWeights,
    weights: HashMap<(HealthQuestion, String), OptionWeights>,
}

impl HealthInsuranceClassifier {
    /// Sums every weight field over the whole table once and indexes rows by
    /// question and option.
    pub fn new(rows: &[HealthOptionWeight]) -> Self {
        let mut denominators = OptionWeights::default();
        let mut weights = HashMap::with_capacity(rows.len());
        for row in rows {
            denominators.accumulate(&row.weights);
            weights.insert((row.question, row.option.clone()), row.weights);
        }
        Self {
            denominators,
            weights,
        }
    }

    /// Table-wide totals used as ratio denominators.
    pub fn denominators(&self) -> &OptionWeights {
        &self.denominators
    }

    /// Classifies a user's health answers.
    ///
    /// Absent (or empty) answers yield HMO / High / no critical illness.
    ///
    /// # Errors
    ///
    /// `DataIntegrity` when an answer names an option with no weight row.
    pub fn classify(
        &self,
        answers: Option<&HealthAnswers>,
    ) -> Result<HealthClassification, QuoteError> {
        let answers = match answers {
            Some(answers) if !answers.is_empty() => answers,
            _ => return Ok(HealthClassification::default_path()),
        };

        let mut totals = OptionWeights::default();
        for (question, option) in answers.iter() {
            let weights = self
                .weights
                .get(&(question, option.to_string()))
                .ok_or_else(|| {
                    QuoteError::data_integrity(format!(
                        "health answer {}='{}' has no option weight row",
                        question, option
                    ))
                })?;
            totals.accumulate(weights);
        }

        let ratios = HealthRatios::between(&totals, &self.denominators);

        let mut plan_type = if ratios.hmo >= ratios.ppo {
            PlanType::Hmo
        } else {
            PlanType::Ppo
        };
        let mut deductible = if ratios.high_deductible > ratios.low_deductible {
            DeductibleLevel::High
        } else {
            DeductibleLevel::Low
        };
        let critical_illness = ratios.critical_illness >= CRITICAL_ILLNESS_THRESHOLD;

        // Overrides apply in this order; q_11 wins over q_5/q_6/q_7.
        if answers.answer(HealthQuestion::Q5) == Some(NO_CHANCE)
            && answers.answer(HealthQuestion::Q6) == Some(ANNUAL_PHYSICAL_ONLY)
            && answers.answer(HealthQuestion::Q7) == Some(WAITS_IT_OUT)
        {
            plan_type = PlanType::Hmo;
        }
        if answers.answer(HealthQuestion::Q2) == Some(EXPECTS_MAJOR_CARE) {
            deductible = DeductibleLevel::Low;
        }
        if matches!(
            answers.answer(HealthQuestion::Q11),
            Some(WANTS_ANY_DOCTOR) | Some(WANTS_SECOND_OPINIONS)
        ) {
            plan_type = PlanType::Ppo;
        }

        Ok(HealthClassification {
            plan_type,
            deductible,
            critical_illness,
            ratios: Some(ratios),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(hmo: f64, ppo: f64, high: f64, low: f64, ci: f64) -> OptionWeights {
        OptionWeights {
            hmo,
            ppo,
            hsa: 0.0,
            high_deductible: high,
            low_deductible: low,
            critical_illness: ci,
        }
    }

    fn table() -> Vec<HealthOptionWeight> {
        vec![
            HealthOptionWeight::new(HealthQuestion::Q1, "No", weights(2.0, 0.0, 2.0, 0.0, 0.0)),
            HealthOptionWeight::new(HealthQuestion::Q1, "Yes", weights(0.0, 2.0, 0.0, 2.0, 1.0)),
            HealthOptionWeight::new(HealthQuestion::Q2, "No", weights(1.0, 0.0, 3.0, 0.0, 0.0)),
            HealthOptionWeight::new(HealthQuestion::Q2, "Yes", weights(0.0, 1.0, 0.0, 1.0, 1.0)),
            HealthOptionWeight::new(HealthQuestion::Q5, NO_CHANCE, weights(1.0, 0.0, 1.0, 0.0, 0.0)),
            HealthOptionWeight::new(HealthQuestion::Q5, "Might go", weights(0.0, 3.0, 0.0, 1.0, 0.0)),
            HealthOptionWeight::new(
                HealthQuestion::Q6,
                ANNUAL_PHYSICAL_ONLY,
                weights(1.0, 0.0, 1.0, 0.0, 0.0),
            ),
            HealthOptionWeight::new(HealthQuestion::Q6, "Monthly", weights(0.0, 3.0, 0.0, 2.0, 1.0)),
            HealthOptionWeight::new(HealthQuestion::Q7, WAITS_IT_OUT, weights(1.0, 0.0, 1.0, 0.0, 0.0)),
            HealthOptionWeight::new(
                HealthQuestion::Q7,
                "Straight to the doctor",
                weights(0.0, 3.0, 0.0, 1.0, 1.0),
            ),
            HealthOptionWeight::new(
                HealthQuestion::Q11,
                WANTS_ANY_DOCTOR,
                weights(0.0, 1.0, 0.0, 0.0, 0.0),
            ),
            HealthOptionWeight::new(
                HealthQuestion::Q11,
                "Whoever my plan covers",
                weights(1.0, 0.0, 0.0, 0.0, 0.0),
            ),
        ]
    }

    #[test]
    fn no_answers_uses_default_path() {
        let classifier = HealthInsuranceClassifier::new(&table());
        let result = classifier.classify(None).unwrap();

        assert_eq!(result.plan_type, PlanType::Hmo);
        assert_eq!(result.deductible, DeductibleLevel::High);
        assert!(!result.critical_illness);
        assert!(result.ratios.is_none());
    }

    #[test]
    fn empty_answers_use_default_path() {
        let classifier = HealthInsuranceClassifier::new(&table());
        let result = classifier.classify(Some(&HealthAnswers::new())).unwrap();
        assert_eq!(result, HealthClassification::default_path());
    }

    #[test]
    fn denominators_sum_each_field_over_whole_table() {
        let classifier = HealthInsuranceClassifier::new(&table());
        let d = classifier.denominators();

        assert_eq!(d.hmo, 7.0);
        assert_eq!(d.ppo, 13.0);
        assert_eq!(d.high_deductible, 8.0);
        assert_eq!(d.low_deductible, 7.0);
        assert_eq!(d.critical_illness, 4.0);
    }

    #[test]
    fn ratios_favor_hmo_and_high_deductible() {
        let classifier = HealthInsuranceClassifier::new(&table());
        let answers = HealthAnswers::new()
            .with_answer(HealthQuestion::Q1, "No")
            .with_answer(HealthQuestion::Q2, "No");

        let result = classifier.classify(Some(&answers)).unwrap();
        let ratios = result.ratios.unwrap();

        assert!((ratios.hmo - 3.0 / 7.0).abs() < 1e-9);
        assert_eq!(ratios.ppo, 0.0);
        assert_eq!(result.plan_type, PlanType::Hmo);
        assert_eq!(result.deductible, DeductibleLevel::High);
        assert!(!result.critical_illness);
    }

    #[test]
    fn ratios_favor_ppo_and_low_deductible_with_critical_illness() {
        let classifier = HealthInsuranceClassifier::new(&table());
        let answers = HealthAnswers::new()
            .with_answer(HealthQuestion::Q5, "Might go")
            .with_answer(HealthQuestion::Q6, "Monthly")
            .with_answer(HealthQuestion::Q7, "Straight to the doctor");

        let result = classifier.classify(Some(&answers)).unwrap();

        assert_eq!(result.plan_type, PlanType::Ppo);
        assert_eq!(result.deductible, DeductibleLevel::Low);
        // 2 of 4 critical illness weight
        assert!(result.critical_illness);
    }

    #[test]
    fn q2_yes_forces_low_deductible() {
        let classifier = HealthInsuranceClassifier::new(&table());
        let answers = HealthAnswers::new()
            .with_answer(HealthQuestion::Q1, "No")
            .with_answer(HealthQuestion::Q2, EXPECTS_MAJOR_CARE)
            .with_answer(HealthQuestion::Q5, NO_CHANCE);

        let result = classifier.classify(Some(&answers)).unwrap();
        let ratios = result.ratios.unwrap();

        assert!(ratios.high_deductible > ratios.low_deductible);
        assert_eq!(result.deductible, DeductibleLevel::Low);
    }

    #[test]
    fn rarely_sick_answers_force_hmo() {
        let table = vec![
            HealthOptionWeight::new(HealthQuestion::Q1, "No", weights(9.0, 0.0, 0.0, 0.0, 0.0)),
            HealthOptionWeight::new(HealthQuestion::Q5, NO_CHANCE, weights(0.0, 5.0, 0.0, 0.0, 0.0)),
            HealthOptionWeight::new(
                HealthQuestion::Q6,
                ANNUAL_PHYSICAL_ONLY,
                weights(0.0, 5.0, 0.0, 0.0, 0.0),
            ),
            HealthOptionWeight::new(HealthQuestion::Q7, WAITS_IT_OUT, weights(1.0, 5.0, 0.0, 0.0, 0.0)),
        ];
        let classifier = HealthInsuranceClassifier::new(&table);
        let answers = HealthAnswers::new()
            .with_answer(HealthQuestion::Q5, NO_CHANCE)
            .with_answer(HealthQuestion::Q6, ANNUAL_PHYSICAL_ONLY)
            .with_answer(HealthQuestion::Q7, WAITS_IT_OUT);

        let result = classifier.classify(Some(&answers)).unwrap();
        let ratios = result.ratios.unwrap();

        assert!(ratios.ppo > ratios.hmo);
        assert_eq!(result.plan_type, PlanType::Hmo);
    }

    #[test]
    fn q11_overrides_rarely_sick_hmo() {
        let classifier = HealthInsuranceClassifier::new(&table());
        let answers = HealthAnswers::new()
            .with_answer(HealthQuestion::Q5, NO_CHANCE)
            .with_answer(HealthQuestion::Q6, ANNUAL_PHYSICAL_ONLY)
            .with_answer(HealthQuestion::Q7, WAITS_IT_OUT)
            .with_answer(HealthQuestion::Q11, WANTS_ANY_DOCTOR);

        let result = classifier.classify(Some(&answers)).unwrap();
        assert_eq!(result.plan_type, PlanType::Ppo);
    }

    #[test]
    fn zero_denominator_yields_zero_ratio() {
        let table = vec![HealthOptionWeight::new(
            HealthQuestion::Q1,
            "No",
            weights(1.0, 0.0, 0.0, 0.0, 0.0),
        )];
        let classifier = HealthInsuranceClassifier::new(&table);
        let answers = HealthAnswers::new().with_answer(HealthQuestion::Q1, "No");

        let result = classifier.classify(Some(&answers)).unwrap();
        let ratios = result.ratios.unwrap();

        assert_eq!(ratios.ppo, 0.0);
        assert_eq!(ratios.critical_illness, 0.0);
        assert_eq!(result.deductible, DeductibleLevel::Low);
    }

    #[test]
    fn ppo_and_hsa_ratios_do_not_include_hmo_weight() {
        let no = OptionWeights {
            hmo: 4.0,
            ppo: 1.0,
            hsa: 1.0,
            ..Default::default()
        };
        let yes = OptionWeights {
            ppo: 1.0,
            hsa: 1.0,
            ..Default::default()
        };
        let table = vec![
            HealthOptionWeight::new(HealthQuestion::Q1, "No", no),
            HealthOptionWeight::new(HealthQuestion::Q1, "Yes", yes),
        ];
        let classifier = HealthInsuranceClassifier::new(&table);
        let answers = HealthAnswers::new().with_answer(HealthQuestion::Q1, "No");

        let ratios = classifier.classify(Some(&answers)).unwrap().ratios.unwrap();
        assert_eq!(classifier.denominators().ppo, 2.0);
        assert_eq!(ratios.ppo, 0.5);
        assert_eq!(ratios.hsa, 0.5);
    }

    #[test]
    fn critical_illness_at_threshold_is_included() {
        let table = vec![
            HealthOptionWeight::new(HealthQuestion::Q1, "No", weights(0.0, 0.0, 0.0, 0.0, 33.0)),
            HealthOptionWeight::new(HealthQuestion::Q1, "Yes", weights(0.0, 0.0, 0.0, 0.0, 67.0)),
        ];
        let classifier = HealthInsuranceClassifier::new(&table);
        let answers = HealthAnswers::new().with_answer(HealthQuestion::Q1, "No");

        let result = classifier.classify(Some(&answers)).unwrap();

        assert_eq!(result.ratios.unwrap().critical_illness, CRITICAL_ILLNESS_THRESHOLD);
        assert!(result.critical_illness);
    }

    #[test]
    fn equal_hmo_and_ppo_ratios_pick_hmo() {
        let table = vec![
            HealthOptionWeight::new(HealthQuestion::Q1, "No", weights(1.0, 1.0, 0.0, 0.0, 0.0)),
            HealthOptionWeight::new(HealthQuestion::Q1, "Yes", weights(1.0, 1.0, 0.0, 0.0, 0.0)),
        ];
        let classifier = HealthInsuranceClassifier::new(&table);
        let answers = HealthAnswers::new().with_answer(HealthQuestion::Q1, "Yes");

        let result = classifier.classify(Some(&answers)).unwrap();
        let ratios = result.ratios.unwrap();

        assert_eq!(ratios.hmo, 0.5);
        assert_eq!(ratios.hmo, ratios.ppo);
        assert_eq!(result.plan_type, PlanType::Hmo);
    }

    #[test]
    fn unknown_option_is_data_integrity_error() {
        let classifier = HealthInsuranceClassifier::new(&table());
        let answers = HealthAnswers::new().with_answer(HealthQuestion::Q1, "Maybe");

        let result = classifier.classify(Some(&answers));
        assert!(matches!(result, Err(QuoteError::DataIntegrity(_))));
    }

    #[test]
    fn plan_type_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&PlanType::Ppo).unwrap(), "\"PPO\"");
        assert_eq!(serde_json::to_string(&DeductibleLevel::High).unwrap(), "\"High\"");
    }
}

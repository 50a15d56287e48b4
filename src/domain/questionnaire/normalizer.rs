//! AnswerNormalizer - coerces raw questionnaire payloads into typed answers.
//!
//! Absent, null and blank values are "not answered" and never an error. A
//! section whose values are all unanswered normalizes to `None`, which sends
//! the matching estimator down its default path. Values that are present but
//! cannot be read (a non-numeric age, an unknown marital status, an unknown
//! question id) are rejected with a [`ValidationError`].

use serde_json::Value;

use super::{
    Gender, GeneralAnswers, HealthAnswers, HealthQuestion, LifeAnswers, MaritalStatus,
    RawAnswers, RawSection, UserAnswers, DEFAULT_GENERAL_GENDER,
};
use crate::domain::foundation::ValidationError;

/// Marital status assumed when the general section leaves it blank.
pub const DEFAULT_MARITAL_STATUS: MaritalStatus = MaritalStatus::Single;

/// Number of children assumed when the general section leaves it blank.
pub const DEFAULT_NUM_KIDS: u32 = 0;

/// Literal a client sends for "prefer not to say".
pub const UNDISCLOSED_GENDER: &str = "none";

const MAX_AGE: i64 = 120;
const MAX_KIDS: i64 = 20;
const MAX_AMOUNT: i64 = 1_000_000_000;

/// Stateless normalizer for raw questionnaire payloads.
pub struct AnswerNormalizer;

impl AnswerNormalizer {
    /// Normalizes every section of a raw payload.
    pub fn normalize(raw: &RawAnswers) -> Result<UserAnswers, ValidationError> {
        let (general, kid_ages) = match &raw.general {
            Some(section) => (
                Self::normalize_general(section)?,
                Self::normalize_kid_ages(section)?,
            ),
            None => (None, Vec::new()),
        };
        let health = match &raw.health {
            Some(section) => Self::normalize_health(section)?,
            None => None,
        };
        let life = match &raw.life {
            Some(section) => Self::normalize_life(section)?,
            None => None,
        };

        Ok(UserAnswers {
            general,
            health,
            life,
            kid_ages,
        })
    }

    /// Normalizes the general section.
    ///
    /// `age` and `annual_income` are required once the section has any
    /// answer at all.
    pub fn normalize_general(section: &RawSection) -> Result<Option<GeneralAnswers>, ValidationError> {
        if section.values().all(is_blank) {
            return Ok(None);
        }

        let age = whole_number("age", section.get("age"), 0, MAX_AGE)?
            .ok_or_else(|| ValidationError::empty_field("age"))?;
        let annual_income = whole_number("annual_income", section.get("annual_income"), 0, MAX_AMOUNT)?
            .ok_or_else(|| ValidationError::empty_field("annual_income"))?;

        let marital_status = match scalar_text("marital_status", section.get("marital_status"))? {
            Some(text) => text.parse()?,
            None => DEFAULT_MARITAL_STATUS,
        };

        let health_field = section.get("health_condition").or_else(|| section.get("health"));
        let health_condition = match scalar_text("health_condition", health_field)? {
            Some(text) => Some(text.parse()?),
            None => None,
        };

        let gender = match scalar_text("gender", section.get("gender"))? {
            Some(text) if text.eq_ignore_ascii_case(UNDISCLOSED_GENDER) => DEFAULT_GENERAL_GENDER,
            Some(text) => text.parse::<Gender>()?,
            None => DEFAULT_GENERAL_GENDER,
        };

        let num_kids = whole_number("num_kids", section.get("num_kids"), 0, MAX_KIDS)?
            .map(|n| n as u32)
            .unwrap_or(DEFAULT_NUM_KIDS);

        Ok(Some(GeneralAnswers {
            age: age as u32,
            zipcode: scalar_text("zipcode", section.get("zipcode"))?,
            marital_status,
            health_condition,
            annual_income,
            spouse_annual_income: whole_number(
                "spouse_annual_income",
                section.get("spouse_annual_income"),
                0,
                MAX_AMOUNT,
            )?,
            spouse_age: whole_number("spouse_age", section.get("spouse_age"), 0, MAX_AGE)?
                .map(|n| n as u32),
            num_kids,
            gender,
        }))
    }

    /// Reads `kid_ages` from the general section, skipping blank entries.
    pub fn normalize_kid_ages(section: &RawSection) -> Result<Vec<u32>, ValidationError> {
        let entries: Vec<&Value> = match section.get("kid_ages") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(items)) => items.iter().collect(),
            Some(single) => vec![single],
        };

        let mut ages = Vec::with_capacity(entries.len());
        for entry in entries {
            if let Some(age) = whole_number("kid_ages", Some(entry), 0, MAX_AGE)? {
                ages.push(age as u32);
            }
        }
        Ok(ages)
    }

    /// Normalizes the health section; keys must be known question ids.
    pub fn normalize_health(section: &RawSection) -> Result<Option<HealthAnswers>, ValidationError> {
        let mut answers = HealthAnswers::new();
        for (key, value) in section {
            let question: HealthQuestion = key.parse()?;
            if let Some(option) = scalar_text(key, Some(value))? {
                answers = answers.with_answer(question, option);
            }
        }

        if answers.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answers))
        }
    }

    /// Normalizes the life section.
    pub fn normalize_life(section: &RawSection) -> Result<Option<LifeAnswers>, ValidationError> {
        let amount = |field: &str| whole_number(field, section.get(field), 0, MAX_AMOUNT);

        let answers = LifeAnswers {
            mortgage_balance: amount("mortgage_balance")?,
            other_debts_balance: amount("other_debts_balance")?,
            existing_life_insurance: amount("existing_life_insurance")?,
            balance_investings_savings: amount("balance_investings_savings")?,
        };

        if answers.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answers))
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.iter().all(is_blank),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn scalar_text(field: &str, value: Option<&Value>) -> Result<Option<String>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(ValidationError::invalid_format(field, "expected a single value")),
    }
}

fn whole_number(
    field: &str,
    value: Option<&Value>,
    min: i64,
    max: i64,
) -> Result<Option<i64>, ValidationError> {
    let Some(text) = scalar_text(field, value)? else {
        return Ok(None);
    };

    let number = match text.parse::<i64>() {
        Ok(n) => n,
        Err(_) => match text.parse::<f64>() {
            Ok(f) if f.is_finite() && f.fract() == 0.0 => f as i64,
            _ => {
                return Err(ValidationError::invalid_format(
                    field,
                    format!("'{}' is not a whole number", text),
                ))
            }
        },
    };

    if number < min || number > max {
        return Err(ValidationError::out_of_range(field, min, max, number));
    }
    Ok(Some(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::HealthCondition;
    use serde_json::json;

    fn section(value: Value) -> RawSection {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn general_section_coerces_strings_and_numbers() {
        let raw = section(json!({
            "age": 27,
            "zipcode": "14850",
            "marital_status": "single",
            "health": "good",
            "annual_income": "10000",
            "spouse_annual_income": "0",
            "num_kids": "0",
        }));

        let general = AnswerNormalizer::normalize_general(&raw).unwrap().unwrap();
        assert_eq!(general.age, 27);
        assert_eq!(general.zipcode.as_deref(), Some("14850"));
        assert_eq!(general.marital_status, MaritalStatus::Single);
        assert_eq!(general.health_condition, Some(HealthCondition::Good));
        assert_eq!(general.annual_income, 10_000);
        assert_eq!(general.spouse_annual_income, Some(0));
        assert_eq!(general.num_kids, 0);
    }

    #[test]
    fn general_section_all_blank_is_absent() {
        let raw = section(json!({ "age": "", "annual_income": null, "kid_ages": [] }));
        assert!(AnswerNormalizer::normalize_general(&raw).unwrap().is_none());
    }

    #[test]
    fn general_section_requires_income_once_answered() {
        let raw = section(json!({ "age": "40" }));
        let err = AnswerNormalizer::normalize_general(&raw).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("annual_income"));
    }

    #[test]
    fn gender_none_and_absent_become_male() {
        let with_none = section(json!({ "age": 30, "annual_income": 1, "gender": "none" }));
        let without = section(json!({ "age": 30, "annual_income": 1 }));

        let a = AnswerNormalizer::normalize_general(&with_none).unwrap().unwrap();
        let b = AnswerNormalizer::normalize_general(&without).unwrap().unwrap();
        assert_eq!(a.gender, Gender::Male);
        assert_eq!(b.gender, Gender::Male);
    }

    #[test]
    fn blank_marital_status_and_kids_use_defaults() {
        let raw = section(json!({ "age": 30, "annual_income": 1, "marital_status": "", "num_kids": "" }));
        let general = AnswerNormalizer::normalize_general(&raw).unwrap().unwrap();
        assert_eq!(general.marital_status, DEFAULT_MARITAL_STATUS);
        assert_eq!(general.num_kids, DEFAULT_NUM_KIDS);
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        let raw = section(json!({ "age": "twenty", "annual_income": 1 }));
        match AnswerNormalizer::normalize_general(&raw) {
            Err(ValidationError::InvalidFormat { field, .. }) => assert_eq!(field, "age"),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn negative_income_is_out_of_range() {
        let raw = section(json!({ "age": 30, "annual_income": "-5" }));
        assert!(matches!(
            AnswerNormalizer::normalize_general(&raw),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn kid_ages_skip_blank_entries() {
        let raw = section(json!({ "kid_ages": ["1", "", 3, null] }));
        assert_eq!(AnswerNormalizer::normalize_kid_ages(&raw).unwrap(), vec![1, 3]);
    }

    #[test]
    fn health_section_drops_unanswered_questions() {
        let raw = section(json!({ "q_1": "No", "q_2": "", "q_5": "Might go" }));
        let health = AnswerNormalizer::normalize_health(&raw).unwrap().unwrap();

        assert_eq!(health.len(), 2);
        assert_eq!(health.answer(HealthQuestion::Q1), Some("No"));
        assert_eq!(health.answer(HealthQuestion::Q2), None);
    }

    #[test]
    fn health_section_all_blank_is_absent() {
        let raw = section(json!({ "q_1": "", "q_2": null }));
        assert!(AnswerNormalizer::normalize_health(&raw).unwrap().is_none());
    }

    #[test]
    fn health_section_rejects_unknown_question() {
        let raw = section(json!({ "q_13": "Yes" }));
        assert!(AnswerNormalizer::normalize_health(&raw).is_err());
    }

    #[test]
    fn life_section_keeps_partial_answers() {
        let raw = section(json!({ "other_debts_balance": 500, "mortgage_balance": "" }));
        let life = AnswerNormalizer::normalize_life(&raw).unwrap().unwrap();

        assert_eq!(life.other_debts_balance, Some(500));
        assert_eq!(life.mortgage_balance, None);
    }

    #[test]
    fn empty_life_section_is_absent() {
        let raw = section(json!({}));
        assert!(AnswerNormalizer::normalize_life(&raw).unwrap().is_none());
    }

    #[test]
    fn normalize_collects_all_sections() {
        let raw: RawAnswers = serde_json::from_value(json!({
            "General": { "age": 35, "annual_income": 60000, "num_kids": 3, "kid_ages": [1, 2, 3] },
            "Life": { "other_debts_balance": 500 },
        }))
        .unwrap();

        let answers = AnswerNormalizer::normalize(&raw).unwrap();
        assert!(answers.general.is_some());
        assert!(answers.health.is_none());
        assert!(answers.life.is_some());
        assert_eq!(answers.kid_ages, vec![1, 2, 3]);
    }
}

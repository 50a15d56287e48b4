//! Health questionnaire answers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the twelve health questions (`q_1` .. `q_12`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthQuestion {
    #[serde(rename = "q_1")]
    Q1,
    #[serde(rename = "q_2")]
    Q2,
    #[serde(rename = "q_3")]
    Q3,
    #[serde(rename = "q_4")]
    Q4,
    #[serde(rename = "q_5")]
    Q5,
    #[serde(rename = "q_6")]
    Q6,
    #[serde(rename = "q_7")]
    Q7,
    #[serde(rename = "q_8")]
    Q8,
    #[serde(rename = "q_9")]
    Q9,
    #[serde(rename = "q_10")]
    Q10,
    #[serde(rename = "q_11")]
    Q11,
    #[serde(rename = "q_12")]
    Q12,
}

impl HealthQuestion {
    pub const ALL: [HealthQuestion; 12] = [
        HealthQuestion::Q1,
        HealthQuestion::Q2,
        HealthQuestion::Q3,
        HealthQuestion::Q4,
        HealthQuestion::Q5,
        HealthQuestion::Q6,
        HealthQuestion::Q7,
        HealthQuestion::Q8,
        HealthQuestion::Q9,
        HealthQuestion::Q10,
        HealthQuestion::Q11,
        HealthQuestion::Q12,
    ];

    /// Returns the wire key, e.g. `"q_5"`.
    pub fn key(&self) -> &'static str {
        match self {
            HealthQuestion::Q1 => "q_1",
            HealthQuestion::Q2 => "q_2",
            HealthQuestion::Q3 => "q_3",
            HealthQuestion::Q4 => "q_4",
            HealthQuestion::Q5 => "q_5",
            HealthQuestion::Q6 => "q_6",
            HealthQuestion::Q7 => "q_7",
            HealthQuestion::Q8 => "q_8",
            HealthQuestion::Q9 => "q_9",
            HealthQuestion::Q10 => "q_10",
            HealthQuestion::Q11 => "q_11",
            HealthQuestion::Q12 => "q_12",
        }
    }
}

impl FromStr for HealthQuestion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HealthQuestion::ALL
            .iter()
            .copied()
            .find(|q| q.key() == s.trim())
            .ok_or_else(|| {
                ValidationError::invalid_format(s, "not a known health question id")
            })
    }
}

impl fmt::Display for HealthQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The chosen option label per answered health question.
///
/// Unanswered questions are simply absent and never contribute to scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthAnswers {
    answers: BTreeMap<HealthQuestion, String>,
}

impl HealthAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any earlier one for the same question.
    pub fn with_answer(mut self, question: HealthQuestion, option: impl Into<String>) -> Self {
        self.answers.insert(question, option.into());
        self
    }

    /// Returns the chosen option for a question, if answered.
    pub fn answer(&self, question: HealthQuestion) -> Option<&str> {
        self.answers.get(&question).map(String::as_str)
    }

    /// Iterates answered questions in question order.
    pub fn iter(&self) -> impl Iterator<Item = (HealthQuestion, &str)> {
        self.answers.iter().map(|(q, option)| (*q, option.as_str()))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

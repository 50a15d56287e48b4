//! Questionnaire module - typed user answers and their normalization.
//!
//! # Sections
//!
//! - `general` - household facts every estimator reads (age, income, kids)
//! - `health` - option chosen for each of the twelve health questions
//! - `life` - debts, savings and existing coverage
//!
//! `AnswerNormalizer` turns a loosely typed client payload (`RawAnswers`)
//! into a `UserAnswers` snapshot.

mod answers;
mod general;
mod health;
mod life;
mod normalizer;

pub use answers::{RawAnswers, RawSection, UserAnswers};
pub use general::{
    Gender, GeneralAnswers, HealthCondition, MaritalStatus, DEFAULT_GENERAL_GENDER,
};
pub use health::{HealthAnswers, HealthQuestion};
pub use life::LifeAnswers;
pub use normalizer::{
    AnswerNormalizer, DEFAULT_MARITAL_STATUS, DEFAULT_NUM_KIDS, UNDISCLOSED_GENDER,
};

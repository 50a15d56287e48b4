//! Benefit Advisor - Questionnaire-driven insurance recommendations
//!
//! This crate scores a user's questionnaire answers into health, life and
//! disability coverage and prices them against a read-only plan catalog.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

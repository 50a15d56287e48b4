//! Recommendation Module - pure estimators that turn answers into coverage.
//!
//! # Components
//!
//! - `LifeInsuranceEstimator` - coverage amount and term for term life
//! - `HealthInsuranceClassifier` - plan type, deductible tier, critical illness
//! - `DisabilityEstimator` - benefit amount, duration and monthly benefit
//! - `buckets` - nearest-bucket snapping onto the catalog key space
//!
//! All functions are pure: answers in, categorical/numeric results out. The
//! catalog lookup that turns a result into a priced plan happens in the
//! application layer.

mod buckets;
mod disability;
mod health;
mod life;

pub use buckets::{
    nearest_bucket, AgeBucket, KidsBucket, PolicyAmount, PolicyTerm, POLICY_AMOUNT_BUCKETS,
};
pub use disability::{
    DisabilityEstimate, DisabilityEstimator, BENEFIT_END_AGE, BENEFIT_REPLACEMENT_RATE,
};
pub use health::{
    DeductibleLevel, HealthClassification, HealthInsuranceClassifier, HealthRatios, PlanType,
    ANNUAL_PHYSICAL_ONLY, CRITICAL_ILLNESS_THRESHOLD, DEFAULT_DEDUCTIBLE, DEFAULT_PLAN_TYPE,
    EXPECTS_MAJOR_CARE, NO_CHANCE, WAITS_IT_OUT, WANTS_ANY_DOCTOR, WANTS_SECOND_OPINIONS,
};
pub use life::{
    LifeEstimate, LifeInsuranceEstimator, AGE_OF_INDEPENDENCE, COLLEGE_COST_PER_YEAR,
    COLLEGE_YEARS, DEFAULT_INCOME_MULTIPLE, INCOME_REPLACEMENT_RATE,
};

//! Catalog buckets - discrete key values for continuous quantities.
//!
//! The plan catalogs are sparse: life plans are priced only for a fixed set
//! of policy amounts and two reference ages, health plans only for zero, one
//! or "two or more" children. Each bucket type here can only hold a value the
//! catalog is keyed by.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Returns the bucket nearest to `value` by absolute difference.
///
/// Ties go to the bucket that appears first in `buckets`. Returns `None`
/// only for an empty slice.
pub fn nearest_bucket(value: f64, buckets: &[i64]) -> Option<i64> {
    buckets
        .iter()
        .copied()
        .min_by(|a, b| {
            let da = (*a as f64 - value).abs();
            let db = (*b as f64 - value).abs();
            da.total_cmp(&db)
        })
}

/// Policy amounts the life catalog is priced for, ascending.
pub const POLICY_AMOUNT_BUCKETS: [i64; 8] = [
    250_000, 300_000, 350_000, 400_000, 450_000, 500_000, 600_000, 700_000,
];

/// A life policy amount drawn from [`POLICY_AMOUNT_BUCKETS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PolicyAmount(i64);

impl PolicyAmount {
    /// Snaps a computed coverage amount to the nearest priced bucket.
    pub fn nearest(coverage: f64) -> Self {
        Self(nearest_bucket(coverage, &POLICY_AMOUNT_BUCKETS).unwrap_or(POLICY_AMOUNT_BUCKETS[0]))
    }

    pub fn dollars(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for PolicyAmount {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if POLICY_AMOUNT_BUCKETS.contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::invalid_format(
                "policy_amount",
                format!("{} is not a priced policy amount", value),
            ))
        }
    }
}

impl From<PolicyAmount> for i64 {
    fn from(amount: PolicyAmount) -> Self {
        amount.0
    }
}

impl fmt::Display for PolicyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference ages the life catalog is priced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum AgeBucket {
    TwentyFive,
    ThirtyFive,
}

const AGE_BUCKETS: [i64; 2] = [25, 35];

impl AgeBucket {
    /// Snaps an age to the nearest reference age; 30 goes to 25.
    pub fn from_age(age: u32) -> Self {
        match nearest_bucket(f64::from(age), &AGE_BUCKETS) {
            Some(35) => AgeBucket::ThirtyFive,
            _ => AgeBucket::TwentyFive,
        }
    }

    pub fn years(&self) -> u32 {
        match self {
            AgeBucket::TwentyFive => 25,
            AgeBucket::ThirtyFive => 35,
        }
    }
}

impl TryFrom<u32> for AgeBucket {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            25 => Ok(AgeBucket::TwentyFive),
            35 => Ok(AgeBucket::ThirtyFive),
            other => Err(ValidationError::invalid_format(
                "age",
                format!("{} is not a priced reference age", other),
            )),
        }
    }
}

impl From<AgeBucket> for u32 {
    fn from(bucket: AgeBucket) -> Self {
        bucket.years()
    }
}

/// Number of children as the health catalog prices them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum KidsBucket {
    NoKids,
    OneKid,
    TwoOrMore,
}

impl KidsBucket {
    /// Caps the count at two.
    pub fn from_count(num_kids: u32) -> Self {
        match num_kids {
            0 => KidsBucket::NoKids,
            1 => KidsBucket::OneKid,
            _ => KidsBucket::TwoOrMore,
        }
    }

    pub fn count(&self) -> u32 {
        match self {
            KidsBucket::NoKids => 0,
            KidsBucket::OneKid => 1,
            KidsBucket::TwoOrMore => 2,
        }
    }
}

impl TryFrom<u32> for KidsBucket {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0..=2 => Ok(KidsBucket::from_count(value)),
            other => Err(ValidationError::out_of_range("num_kids", 0, 2, i64::from(other))),
        }
    }
}

impl From<KidsBucket> for u32 {
    fn from(bucket: KidsBucket) -> Self {
        bucket.count()
    }
}

/// Length of a term life policy in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyTerm(u32);

impl PolicyTerm {
    /// The only term the estimator recommends.
    pub const TWENTY_YEARS: Self = Self(20);

    pub fn new(years: u32) -> Self {
        Self(years)
    }

    pub fn years(&self) -> u32 {
        self.0
    }
}

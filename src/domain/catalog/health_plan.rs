//! Priced health plans.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::PlanId;
use crate::domain::recommendation::{DeductibleLevel, KidsBucket, PlanType};

/// Metal tier of a marketplace health plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedalTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl MedalTier {
    pub fn display_name(&self) -> &'static str {
        match self {
            MedalTier::Bronze => "Bronze",
            MedalTier::Silver => "Silver",
            MedalTier::Gold => "Gold",
            MedalTier::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for MedalTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Everything the health catalog is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HealthPlanKey {
    pub plan_type: PlanType,
    pub deductible_level: DeductibleLevel,
    pub has_spouse: bool,
    pub num_kids: KidsBucket,
}

impl HealthPlanKey {
    pub fn new(
        plan_type: PlanType,
        deductible_level: DeductibleLevel,
        has_spouse: bool,
        num_kids: u32,
    ) -> Self {
        Self {
            plan_type,
            deductible_level,
            has_spouse,
            num_kids: KidsBucket::from_count(num_kids),
        }
    }
}

impl fmt::Display for HealthPlanKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/spouse={}/kids={}",
            self.plan_type,
            self.deductible_level,
            self.has_spouse,
            self.num_kids.count()
        )
    }
}

/// A priced health plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthPlan {
    pub id: PlanId,
    #[serde(flatten)]
    pub key: HealthPlanKey,
    pub plan_name: String,
    pub carrier: String,
    pub medal: MedalTier,
    /// US dollars per month.
    pub monthly_premium: f64,
    /// Yearly deductible in US dollars.
    pub deductible: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_caps_kids_at_two() {
        let key = HealthPlanKey::new(PlanType::Hmo, DeductibleLevel::High, true, 5);
        assert_eq!(key.num_kids, KidsBucket::TwoOrMore);
        assert_eq!(key, HealthPlanKey::new(PlanType::Hmo, DeductibleLevel::High, true, 2));
    }

    #[test]
    fn key_displays_compactly() {
        let key = HealthPlanKey::new(PlanType::Ppo, DeductibleLevel::Low, false, 1);
        assert_eq!(key.to_string(), "PPO/Low/spouse=false/kids=1");
    }

    #[test]
    fn plan_deserializes_with_flattened_key() {
        let plan: HealthPlan = serde_json::from_str(
            r#"{
                "id": "hp-1",
                "plan_type": "PPO",
                "deductible_level": "Low",
                "has_spouse": true,
                "num_kids": 2,
                "plan_name": "Open Access Gold",
                "carrier": "Aetna",
                "medal": "gold",
                "monthly_premium": 812.5,
                "deductible": 1500
            }"#,
        )
        .unwrap();

        assert_eq!(plan.key.plan_type, PlanType::Ppo);
        assert_eq!(plan.key.num_kids, KidsBucket::TwoOrMore);
        assert_eq!(plan.medal, MedalTier::Gold);
        assert_eq!(plan.deductible, 1500.0);
    }
}

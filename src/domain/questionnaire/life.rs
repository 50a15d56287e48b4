//! Life questionnaire answers.

use serde::{Deserialize, Serialize};

/// Balances reported on the life questionnaire, in whole US dollars.
///
/// Every field is optional; the estimator substitutes zero for a missing
/// balance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeAnswers {
    pub mortgage_balance: Option<i64>,
    pub other_debts_balance: Option<i64>,
    pub existing_life_insurance: Option<i64>,
    pub balance_investings_savings: Option<i64>,
}

impl LifeAnswers {
    pub fn is_empty(&self) -> bool {
        self.mortgage_balance.is_none()
            && self.other_debts_balance.is_none()
            && self.existing_life_insurance.is_none()
            && self.balance_investings_savings.is_none()
    }
}

//! Loads the answer sections one category needs.

use crate::domain::foundation::UserId;
use crate::domain::questionnaire::UserAnswers;
use crate::domain::quote::{InsuranceType, QuoteError};
use crate::ports::AnswerStore;

/// Reads only the sections the category's estimator looks at.
///
/// | Category | Sections |
/// |----------|----------|
/// | HEALTH | general, health |
/// | LIFE | general, life, kid ages |
/// | DISABILITY | general |
pub(crate) async fn load_answers(
    store: &dyn AnswerStore,
    user_id: &UserId,
    insurance_type: InsuranceType,
) -> Result<UserAnswers, QuoteError> {
    let mut answers = UserAnswers::new();
    answers.general = store.general_answers(user_id).await?;

    match insurance_type {
        InsuranceType::Health => {
            answers.health = store.health_answers(user_id).await?;
        }
        InsuranceType::Life => {
            answers.life = store.life_answers(user_id).await?;
            answers.kid_ages = store.kid_ages(user_id).await?;
        }
        InsuranceType::Disability => {}
    }

    Ok(answers)
}

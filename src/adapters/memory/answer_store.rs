//! In-memory answer store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::questionnaire::{GeneralAnswers, HealthAnswers, LifeAnswers, UserAnswers};
use crate::ports::AnswerStore;

/// In-memory implementation of the AnswerStore port.
///
/// One `UserAnswers` snapshot per user. Does not persist across restarts.
#[derive(Default)]
pub struct InMemoryAnswerStore {
    answers: RwLock<HashMap<UserId, UserAnswers>>,
}

impl InMemoryAnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything stored for a user, as one snapshot.
    pub fn snapshot(&self, user_id: &UserId) -> Option<UserAnswers> {
        self.answers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .cloned()
    }

    fn read<T>(&self, user_id: &UserId, section: impl FnOnce(&UserAnswers) -> T) -> Option<T> {
        self.answers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .map(section)
    }
}

#[async_trait]
impl AnswerStore for InMemoryAnswerStore {
    async fn general_answers(
        &self,
        user_id: &UserId,
    ) -> Result<Option<GeneralAnswers>, DomainError> {
        Ok(self.read(user_id, |a| a.general.clone()).flatten())
    }

    async fn health_answers(&self, user_id: &UserId) -> Result<Option<HealthAnswers>, DomainError> {
        Ok(self.read(user_id, |a| a.health.clone()).flatten())
    }

    async fn life_answers(&self, user_id: &UserId) -> Result<Option<LifeAnswers>, DomainError> {
        Ok(self.read(user_id, |a| a.life.clone()).flatten())
    }

    async fn kid_ages(&self, user_id: &UserId) -> Result<Vec<u32>, DomainError> {
        Ok(self.read(user_id, |a| a.kid_ages.clone()).unwrap_or_default())
    }

    async fn save_answers(
        &self,
        user_id: &UserId,
        answers: &UserAnswers,
    ) -> Result<(), DomainError> {
        let mut all = self.answers.write().unwrap_or_else(PoisonError::into_inner);
        let stored = all.entry(user_id.clone()).or_default();

        if let Some(general) = &answers.general {
            stored.general = Some(general.clone());
            stored.kid_ages = answers.kid_ages.clone();
        }
        if let Some(health) = &answers.health {
            stored.health = Some(health.clone());
        }
        if let Some(life) = &answers.life {
            stored.life = Some(life.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::{HealthQuestion, MaritalStatus};

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[tokio::test]
    async fn unknown_user_has_no_answers() {
        let store = InMemoryAnswerStore::new();
        assert!(store.general_answers(&user()).await.unwrap().is_none());
        assert!(store.kid_ages(&user()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn kid_ages_are_replaced_with_general_section() {
        let store = InMemoryAnswerStore::new();
        let general = GeneralAnswers::new(35, MaritalStatus::Married, 60_000, 2);
        store
            .save_answers(
                &user(),
                &UserAnswers::new()
                    .with_general(general.clone())
                    .with_kid_ages(vec![3, 5]),
            )
            .await
            .unwrap();
        store
            .save_answers(
                &user(),
                &UserAnswers::new()
                    .with_general(general)
                    .with_kid_ages(vec![4]),
            )
            .await
            .unwrap();

        assert_eq!(store.kid_ages(&user()).await.unwrap(), vec![4]);
    }

    #[tokio::test]
    async fn health_only_save_keeps_general() {
        let store = InMemoryAnswerStore::new();
        let general = GeneralAnswers::new(35, MaritalStatus::Single, 60_000, 0);
        store
            .save_answers(&user(), &UserAnswers::new().with_general(general.clone()))
            .await
            .unwrap();
        store
            .save_answers(
                &user(),
                &UserAnswers::new()
                    .with_health(HealthAnswers::new().with_answer(HealthQuestion::Q2, "Yes")),
            )
            .await
            .unwrap();

        let snapshot = store.snapshot(&user()).unwrap();
        assert_eq!(snapshot.general, Some(general));
        assert!(snapshot.health.is_some());
    }
}

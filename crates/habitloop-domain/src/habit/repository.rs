use async_trait::async_trait;

use super::Habit;
use crate::shared::{DomainError, HabitId, UserId};

#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Save (upsert) a habit aggregate.
    async fn save(&self, habit: &Habit) -> Result<(), DomainError>;

    /// Find a habit by id regardless of owner.
    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError>;

    /// Find a habit by id, scoped to its owner. Returns `None` when the habit
    /// does not exist or belongs to another user.
    async fn find_by_id_for_user(
        &self,
        id: &HabitId,
        user_id: &UserId,
    ) -> Result<Option<Habit>, DomainError>;

    /// List a user's active habits, most recently created first.
    async fn list_active_for_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError>;
}

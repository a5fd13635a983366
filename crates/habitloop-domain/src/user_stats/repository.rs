use async_trait::async_trait;

use crate::shared::{DomainError, UserId};

/// Per-user aggregate counters derived from completion events.
#[async_trait]
pub trait UserStatsRepository: Send + Sync {
    /// Raise the user's best-streak counter to `candidate` if it exceeds
    /// the stored value; the counter never decreases. Returns the persisted
    /// value.
    async fn update_total_streak_days(
        &self,
        user_id: &UserId,
        candidate: u32,
    ) -> Result<u32, DomainError>;

    /// The stored best-streak counter; zero for an unknown user.
    async fn total_streak_days(&self, user_id: &UserId) -> Result<u32, DomainError>;
}

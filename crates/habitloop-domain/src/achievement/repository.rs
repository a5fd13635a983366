use std::collections::HashSet;

use async_trait::async_trait;

use super::{AchievementKind, AchievementRecord};
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    /// Append an unlock. Idempotent on (user, kind): appending an already
    /// earned kind is a no-op, never a duplicate and never an error.
    async fn append(&self, record: &AchievementRecord) -> Result<(), DomainError>;

    /// The set of kinds the user has already earned.
    async fn list_earned_kinds(&self, user_id: &UserId)
        -> Result<HashSet<AchievementKind>, DomainError>;

    /// All earned achievements, most recent first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<AchievementRecord>, DomainError>;
}

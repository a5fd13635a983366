use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::persistence::SqliteRepositoryBase;
use habitloop_domain::shared::{DomainError, UserId};
use habitloop_domain::user_stats::UserStatsRepository;

pub struct SqliteUserStatsRepository {
    base: SqliteRepositoryBase,
}

impl SqliteUserStatsRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl UserStatsRepository for SqliteUserStatsRepository {
    async fn update_total_streak_days(
        &self,
        user_id: &UserId,
        candidate: u32,
    ) -> Result<u32, DomainError> {
        // MAX in the upsert keeps the counter monotonic under concurrent
        // updates without a read-modify-write round trip.
        let query = r#"
            INSERT INTO user_stats (user_id, total_streak_days)
            VALUES (?1, ?2)
            ON CONFLICT(user_id) DO UPDATE
            SET total_streak_days = MAX(total_streak_days, excluded.total_streak_days)
            RETURNING total_streak_days
        "#;

        let value: i64 = sqlx::query_scalar(query)
            .bind(user_id.as_str())
            .bind(candidate as i64)
            .fetch_one(self.base.pool())
            .await
            .map_err(|e| DomainError::Repository(format!("Update total streak days: {e}")))?;

        Ok(value as u32)
    }

    async fn total_streak_days(&self, user_id: &UserId) -> Result<u32, DomainError> {
        let query = "SELECT total_streak_days FROM user_stats WHERE user_id = ?1";

        let value: Option<i64> = sqlx::query_scalar(query)
            .bind(user_id.as_str())
            .fetch_optional(self.base.pool())
            .await
            .map_err(|e| DomainError::Repository(format!("Get total streak days: {e}")))?;

        Ok(value.unwrap_or(0) as u32)
    }
}

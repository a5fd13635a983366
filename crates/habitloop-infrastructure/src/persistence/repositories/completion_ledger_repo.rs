use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::{ResultExt, SqliteRepositoryBase};
use habitloop_domain::completion::{CompletionLedger, CompletionRecord};
use habitloop_domain::shared::{DomainError, HabitId, UserId};

#[derive(FromRow)]
struct CompletionRow {
    id: String,
    habit_id: String,
    user_id: String,
    date: NaiveDate,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
}

impl CompletionRow {
    fn into_record(self) -> CompletionRecord {
        CompletionRecord::restore(
            self.id,
            HabitId::from_string(&self.habit_id),
            UserId::from_string(&self.user_id),
            self.date,
            self.completed,
            self.completed_at,
        )
    }
}

pub struct SqliteCompletionLedger {
    base: SqliteRepositoryBase,
}

impl SqliteCompletionLedger {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }

    /// One read-modify-write attempt. A concurrent first toggle of the same
    /// (habit, day) makes the INSERT trip the unique index and surface as
    /// `Conflict`.
    async fn try_toggle(
        &self,
        habit_id: &HabitId,
        user_id: &UserId,
        day: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<CompletionRecord, DomainError> {
        if let Some(mut record) = self.find_by_habit_and_day(habit_id, day).await? {
            record.toggle(now);

            let query = r#"
                UPDATE habit_logs
                SET completed = ?2, completed_at = ?3
                WHERE id = ?1
            "#;

            self.base
                .execute(
                    sqlx::query(query)
                        .bind(record.id())
                        .bind(record.is_completed())
                        .bind(record.completed_at()),
                    "Flip completion record",
                )
                .await?;

            Ok(record)
        } else {
            let record = CompletionRecord::first_toggle(habit_id.clone(), user_id.clone(), day, now);

            let query = r#"
                INSERT INTO habit_logs (id, habit_id, user_id, date, completed, completed_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#;

            self.base
                .execute(
                    sqlx::query(query)
                        .bind(record.id())
                        .bind(record.habit_id().as_str())
                        .bind(record.user_id().as_str())
                        .bind(record.day())
                        .bind(record.is_completed())
                        .bind(record.completed_at()),
                    "Create completion record",
                )
                .await?;

            Ok(record)
        }
    }
}

#[async_trait]
impl CompletionLedger for SqliteCompletionLedger {
    async fn toggle(
        &self,
        habit_id: &HabitId,
        user_id: &UserId,
        day: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<CompletionRecord, DomainError> {
        match self.try_toggle(habit_id, user_id, day, now).await {
            Err(e) if e.is_recoverable() => {
                // Lost a create race against a concurrent toggle of the same
                // day; the record exists now, so the retry takes the flip
                // path.
                tracing::warn!(
                    habit_id = %habit_id,
                    day = %day,
                    "retrying completion toggle after duplicate-key race"
                );
                self.try_toggle(habit_id, user_id, day, now).await
            }
            other => other,
        }
    }

    async fn find_by_habit_and_day(
        &self,
        habit_id: &HabitId,
        day: NaiveDate,
    ) -> Result<Option<CompletionRecord>, DomainError> {
        let query = r#"
            SELECT id, habit_id, user_id, date, completed, completed_at
            FROM habit_logs
            WHERE habit_id = ?1 AND date = ?2
        "#;

        let row: Option<CompletionRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(habit_id.as_str()).bind(day),
                "Find completion record by habit and day",
            )
            .await?;

        Ok(row.map(|r| r.into_record()))
    }

    async fn completed_days_descending(
        &self,
        habit_id: &HabitId,
    ) -> Result<Vec<NaiveDate>, DomainError> {
        let query = r#"
            SELECT date
            FROM habit_logs
            WHERE habit_id = ?1 AND completed = 1
            ORDER BY date DESC
        "#;

        sqlx::query_scalar(query)
            .bind(habit_id.as_str())
            .fetch_all(self.base.pool())
            .await
            .to_repo_err()
    }

    async fn list_in_range(
        &self,
        habit_id: &HabitId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CompletionRecord>, DomainError> {
        let query = r#"
            SELECT id, habit_id, user_id, date, completed, completed_at
            FROM habit_logs
            WHERE habit_id = ?1
              AND date >= ?2
              AND date <= ?3
            ORDER BY date ASC
        "#;

        let rows: Vec<CompletionRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query)
                    .bind(habit_id.as_str())
                    .bind(start)
                    .bind(end),
                "List completion records in range",
            )
            .await?;

        Ok(rows.into_iter().map(|r| r.into_record()).collect())
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use habitloop_domain::habit::{Habit, HabitColor, HabitRepository};
use habitloop_domain::shared::{DomainError, HabitId, UserId};

#[derive(FromRow)]
struct HabitRow {
    id: String,
    user_id: String,
    name: String,
    description: Option<String>,
    color: String,
    icon: String,
    active: bool,
    current_streak: i64,
    longest_streak: i64,
    last_completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl HabitRow {
    fn try_into_habit(self) -> Result<Habit, DomainError> {
        let color = HabitColor::parse(&self.color).map_err(|_| {
            DomainError::DataIntegrity(format!(
                "Habit {} has unknown color: {}",
                self.id, self.color
            ))
        })?;

        Ok(Habit::restore(
            HabitId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.name,
            self.description,
            color,
            self.icon,
            self.active,
            self.current_streak as u32,
            self.longest_streak as u32,
            self.last_completed_at,
            self.created_at,
        ))
    }
}

pub struct SqliteHabitRepository {
    base: SqliteRepositoryBase,
}

impl SqliteHabitRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl HabitRepository for SqliteHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        let query = r#"
            INSERT OR REPLACE INTO habits (
                id,
                user_id,
                name,
                description,
                color,
                icon,
                active,
                current_streak,
                longest_streak,
                last_completed_at,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(habit.id().as_str())
                    .bind(habit.user_id().as_str())
                    .bind(habit.name())
                    .bind(habit.description())
                    .bind(habit.color().as_str())
                    .bind(habit.icon())
                    .bind(habit.is_active())
                    .bind(habit.current_streak() as i64)
                    .bind(habit.longest_streak() as i64)
                    .bind(habit.last_completed_at())
                    .bind(habit.created_at()),
                "Save habit",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let query = r#"
            SELECT
                id, user_id, name, description, color, icon, active,
                current_streak, longest_streak, last_completed_at, created_at
            FROM habits
            WHERE id = ?1
        "#;

        let row: Option<HabitRow> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(id.as_str()), "Find habit by ID")
            .await?;

        row.map(|r| r.try_into_habit()).transpose()
    }

    async fn find_by_id_for_user(
        &self,
        id: &HabitId,
        user_id: &UserId,
    ) -> Result<Option<Habit>, DomainError> {
        let query = r#"
            SELECT
                id, user_id, name, description, color, icon, active,
                current_streak, longest_streak, last_completed_at, created_at
            FROM habits
            WHERE id = ?1 AND user_id = ?2
        "#;

        let row: Option<HabitRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(id.as_str()).bind(user_id.as_str()),
                "Find habit by ID for user",
            )
            .await?;

        row.map(|r| r.try_into_habit()).transpose()
    }

    async fn list_active_for_user(&self, user_id: &UserId) -> Result<Vec<Habit>, DomainError> {
        let query = r#"
            SELECT
                id, user_id, name, description, color, icon, active,
                current_streak, longest_streak, last_completed_at, created_at
            FROM habits
            WHERE user_id = ?1 AND active = 1
            ORDER BY created_at DESC
        "#;

        let rows: Vec<HabitRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query).bind(user_id.as_str()),
                "List active habits for user",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_habit()).collect()
    }
}

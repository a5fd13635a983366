use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::persistence::{ResultExt, SqliteRepositoryBase};
use habitloop_domain::achievement::{AchievementKind, AchievementRecord, AchievementRepository};
use habitloop_domain::shared::{DomainError, UserId};

#[derive(FromRow)]
struct AchievementRow {
    id: String,
    user_id: String,
    kind: String,
    title: String,
    description: String,
    icon: String,
    earned_at: DateTime<Utc>,
}

impl AchievementRow {
    fn try_into_record(self) -> Result<AchievementRecord, DomainError> {
        let kind = AchievementKind::from_key(&self.kind).ok_or_else(|| {
            DomainError::DataIntegrity(format!(
                "Achievement {} has unknown kind: {}",
                self.id, self.kind
            ))
        })?;

        Ok(AchievementRecord::restore(
            self.id,
            UserId::from_string(&self.user_id),
            kind,
            self.title,
            self.description,
            self.icon,
            self.earned_at,
        ))
    }
}

pub struct SqliteAchievementRepository {
    base: SqliteRepositoryBase,
}

impl SqliteAchievementRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl AchievementRepository for SqliteAchievementRepository {
    async fn append(&self, record: &AchievementRecord) -> Result<(), DomainError> {
        // Unique (user_id, kind) index makes re-appending an earned kind a
        // no-op instead of a duplicate row.
        let query = r#"
            INSERT OR IGNORE INTO achievements (
                id,
                user_id,
                kind,
                title,
                description,
                icon,
                earned_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(record.id())
                    .bind(record.user_id().as_str())
                    .bind(record.kind().key())
                    .bind(record.title())
                    .bind(record.description())
                    .bind(record.icon())
                    .bind(record.earned_at()),
                "Append achievement",
            )
            .await?;

        Ok(())
    }

    async fn list_earned_kinds(
        &self,
        user_id: &UserId,
    ) -> Result<HashSet<AchievementKind>, DomainError> {
        let query = "SELECT kind FROM achievements WHERE user_id = ?1";

        let keys: Vec<String> = sqlx::query_scalar(query)
            .bind(user_id.as_str())
            .fetch_all(self.base.pool())
            .await
            .to_repo_err()?;

        keys.iter()
            .map(|key| {
                AchievementKind::from_key(key).ok_or_else(|| {
                    DomainError::DataIntegrity(format!("Unknown achievement kind: {key}"))
                })
            })
            .collect()
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<AchievementRecord>, DomainError> {
        let query = r#"
            SELECT id, user_id, kind, title, description, icon, earned_at
            FROM achievements
            WHERE user_id = ?1
            ORDER BY earned_at DESC
        "#;

        let rows: Vec<AchievementRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query).bind(user_id.as_str()),
                "List achievements for user",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_record()).collect()
    }
}

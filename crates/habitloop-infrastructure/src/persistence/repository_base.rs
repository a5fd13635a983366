use std::sync::Arc;

use habitloop_domain::shared::DomainError;
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteQueryResult, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};

/// Shared plumbing for SQLite repositories: pool access plus query helpers
/// that attach an operation label to storage errors.
pub struct SqliteRepositoryBase {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositoryBase {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn execute<'a>(
        &self,
        query: Query<'a, Sqlite, SqliteArguments<'a>>,
        context: &str,
    ) -> Result<SqliteQueryResult, DomainError> {
        query
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error(context, e))
    }

    pub async fn fetch_optional<'a, T>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
        context: &str,
    ) -> Result<Option<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error(context, e))
    }

    pub async fn fetch_all<'a, T>(
        &self,
        query: QueryAs<'a, Sqlite, T, SqliteArguments<'a>>,
        context: &str,
    ) -> Result<Vec<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error(context, e))
    }
}

/// Unique-constraint races surface as `Conflict` so callers can tell a
/// benign concurrent toggle from a real storage failure.
pub(crate) fn map_sqlx_error(context: &str, error: sqlx::Error) -> DomainError {
    if error
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        DomainError::Conflict(format!("{context}: {error}"))
    } else {
        DomainError::Repository(format!("{context}: {error}"))
    }
}

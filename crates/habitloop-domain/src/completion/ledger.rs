use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use super::CompletionRecord;
use crate::shared::{DomainError, HabitId, UserId};

/// Append/update log of per-day completion records for a habit.
///
/// Queries for a habit with no records return empty results, not errors;
/// habit existence is the caller's concern.
#[async_trait]
pub trait CompletionLedger: Send + Sync {
    /// Flip the completion state of one day.
    ///
    /// Creates the day's record (completed) when none exists, otherwise
    /// flips it in place. Implementations must serialize concurrent toggles
    /// of the same (habit, day): a uniqueness constraint on the pair plus a
    /// single internal retry of the read-modify-write on a duplicate-key
    /// race.
    async fn toggle(
        &self,
        habit_id: &HabitId,
        user_id: &UserId,
        day: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<CompletionRecord, DomainError>;

    /// The day's record, if the day was ever touched.
    async fn find_by_habit_and_day(
        &self,
        habit_id: &HabitId,
        day: NaiveDate,
    ) -> Result<Option<CompletionRecord>, DomainError>;

    /// All completed days for a habit, most recent first.
    async fn completed_days_descending(
        &self,
        habit_id: &HabitId,
    ) -> Result<Vec<NaiveDate>, DomainError>;

    /// All records in the inclusive day range, ascending by day. Days with
    /// no record are simply absent; the projection layer fills them in as
    /// not completed.
    async fn list_in_range(
        &self,
        habit_id: &HabitId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CompletionRecord>, DomainError>;
}

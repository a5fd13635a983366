use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::{HabitId, UserId};

/// The per-day completion fact for one habit.
///
/// At most one record exists per (habit, day). A record with
/// `completed = false` means the day was explicitly unmarked, which is
/// distinct from no record at all. Records are created on the first toggle
/// of a day, flipped in place afterwards, and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    id: String,
    habit_id: HabitId,
    user_id: UserId,
    day: NaiveDate,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
}

impl CompletionRecord {
    /// First toggle of a day always marks it completed.
    pub fn first_toggle(habit_id: HabitId, user_id: UserId, day: NaiveDate, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            habit_id,
            user_id,
            day,
            completed: true,
            completed_at: Some(now),
        }
    }

    pub fn restore(
        id: String,
        habit_id: HabitId,
        user_id: UserId,
        day: NaiveDate,
        completed: bool,
        completed_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            habit_id,
            user_id,
            day,
            completed,
            completed_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn habit_id(&self) -> &HabitId {
        &self.habit_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Flip the completion state. `completed_at` tracks the instant of the
    /// toggle that marked the day done and is cleared when it is unmarked.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        self.completed = !self.completed;
        self.completed_at = if self.completed { Some(now) } else { None };
    }
}

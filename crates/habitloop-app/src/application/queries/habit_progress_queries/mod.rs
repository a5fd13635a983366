use std::sync::Arc;

use crate::application::dtos::{ProgressDayDto, StreakInfoDto};
use habitloop_domain::completion::CompletionLedger;
use habitloop_domain::habit::HabitRepository;
use habitloop_domain::shared::{Clock, DomainError, HabitId, UserId};

mod progress;
mod streak;

pub struct HabitProgressQueries {
    habit_repo: Arc<dyn HabitRepository>,
    ledger: Arc<dyn CompletionLedger>,
    clock: Arc<dyn Clock>,
}

impl HabitProgressQueries {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        ledger: Arc<dyn CompletionLedger>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            habit_repo,
            ledger,
            clock,
        }
    }

    /// Current/longest streak plus today's completion state for one habit
    pub async fn get_streak_info(
        &self,
        habit_id: &HabitId,
        user_id: &UserId,
    ) -> Result<StreakInfoDto, DomainError> {
        streak::get_streak_info(
            self.habit_repo.as_ref(),
            self.ledger.as_ref(),
            self.clock.as_ref(),
            habit_id,
            user_id,
        )
        .await
    }

    /// One entry per day in the trailing window, absent days filled in as
    /// not completed
    pub async fn get_progress(
        &self,
        habit_id: &HabitId,
        user_id: &UserId,
        window_days: u32,
    ) -> Result<Vec<ProgressDayDto>, DomainError> {
        progress::get_progress(
            self.habit_repo.as_ref(),
            self.ledger.as_ref(),
            self.clock.as_ref(),
            habit_id,
            user_id,
            window_days,
        )
        .await
    }
}

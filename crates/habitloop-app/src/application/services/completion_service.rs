use std::sync::Arc;

use chrono::NaiveDate;
use log::info;

use crate::application::dtos::ToggleOutcomeDto;
use habitloop_domain::achievement::{AchievementPolicy, AchievementRecord, AchievementRepository};
use habitloop_domain::completion::CompletionLedger;
use habitloop_domain::habit::HabitRepository;
use habitloop_domain::shared::{Clock, DomainError, HabitId, UserId};
use habitloop_domain::streak::StreakEngine;
use habitloop_domain::user_stats::UserStatsRepository;

/// Orchestrates the toggle flow: flip one day in the ledger, recompute the
/// streaks from the full history, merge them onto the habit, and decide
/// achievement unlocks.
pub struct CompletionService {
    habit_repo: Arc<dyn HabitRepository>,
    ledger: Arc<dyn CompletionLedger>,
    achievement_repo: Arc<dyn AchievementRepository>,
    user_stats_repo: Arc<dyn UserStatsRepository>,
    clock: Arc<dyn Clock>,
}

impl CompletionService {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        ledger: Arc<dyn CompletionLedger>,
        achievement_repo: Arc<dyn AchievementRepository>,
        user_stats_repo: Arc<dyn UserStatsRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            habit_repo,
            ledger,
            achievement_repo,
            user_stats_repo,
            clock,
        }
    }

    /// Flip one day's completion state. `day` defaults to today.
    pub async fn toggle_completion(
        &self,
        habit_id: &HabitId,
        user_id: &UserId,
        day: Option<NaiveDate>,
    ) -> Result<ToggleOutcomeDto, DomainError> {
        let mut habit = self
            .habit_repo
            .find_by_id_for_user(habit_id, user_id)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(habit_id.to_string()))?;

        let today = self.clock.today();
        let day = day.unwrap_or(today);
        if day > today {
            return Err(DomainError::InvalidDate(format!(
                "Cannot toggle a future day: {day}"
            )));
        }

        let now = self.clock.now();
        let record = self.ledger.toggle(habit_id, user_id, day, now).await?;

        // Read-after-write: recompute from the full history including the
        // record just flipped.
        let completed_days = self.ledger.completed_days_descending(habit_id).await?;
        let computation = StreakEngine::compute(&completed_days, today);

        habit.apply_streaks(&computation);
        if record.is_completed() {
            habit.record_completion(now);
        }
        self.habit_repo.save(&habit).await?;

        let mut achievement_unlocked = None;
        if record.is_completed() && computation.current_streak > 0 {
            let earned = self.achievement_repo.list_earned_kinds(user_id).await?;
            if let Some(kind) = AchievementPolicy::evaluate_streak_unlock(
                computation.current_streak,
                record.is_completed(),
                &earned,
            ) {
                let unlock = AchievementRecord::unlock(user_id.clone(), kind, now);
                self.achievement_repo.append(&unlock).await?;
                achievement_unlocked = Some(kind.key().to_string());
            }

            self.user_stats_repo
                .update_total_streak_days(user_id, computation.current_streak)
                .await?;
        }

        info!(
            "[toggle] habit_id={} day={} completed={} current={} longest={} unlocked={:?}",
            habit_id,
            day,
            record.is_completed(),
            habit.current_streak(),
            habit.longest_streak(),
            achievement_unlocked
        );

        Ok(ToggleOutcomeDto {
            completed: record.is_completed(),
            current_streak: habit.current_streak(),
            longest_streak: habit.longest_streak(),
            achievement_unlocked,
        })
    }
}

use log::info;

use crate::application::dtos::StreakInfoDto;
use habitloop_domain::completion::CompletionLedger;
use habitloop_domain::habit::HabitRepository;
use habitloop_domain::shared::{Clock, DomainError, HabitId, UserId};
use habitloop_domain::streak::StreakEngine;

/// Streak statistics for one habit, recomputed from the full history.
///
/// The longest streak reported to the caller is the max of the recomputed
/// value and the one cached on the habit, so ledger edits never make it
/// shrink.
pub async fn get_streak_info(
    habit_repo: &dyn HabitRepository,
    ledger: &dyn CompletionLedger,
    clock: &dyn Clock,
    habit_id: &HabitId,
    user_id: &UserId,
) -> Result<StreakInfoDto, DomainError> {
    let habit = habit_repo
        .find_by_id_for_user(habit_id, user_id)
        .await?
        .ok_or_else(|| DomainError::HabitNotFound(habit_id.to_string()))?;

    let today = clock.today();
    let completed_days = ledger.completed_days_descending(habit_id).await?;
    let computation = StreakEngine::compute(&completed_days, today);

    let today_completed = ledger
        .find_by_habit_and_day(habit_id, today)
        .await?
        .map(|record| record.is_completed())
        .unwrap_or(false);

    let dto = StreakInfoDto {
        current_streak: computation.current_streak,
        longest_streak: habit.longest_streak().max(computation.longest_streak),
        today_completed,
        total_completed_days: computation.total_completed_days,
    };

    info!(
        "[streak] get_streak_info habit_id={} current={} longest={} today_completed={}",
        habit_id, dto.current_streak, dto.longest_streak, dto.today_completed
    );

    Ok(dto)
}

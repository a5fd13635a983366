use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use log::{info, warn};

use crate::application::dtos::ProgressDayDto;
use habitloop_domain::completion::{CompletionLedger, CompletionRecord};
use habitloop_domain::habit::HabitRepository;
use habitloop_domain::shared::{Clock, DomainError, HabitId, UserId};

/// Upper bound on the progress window; anything longer is a caller bug.
const MAX_WINDOW_DAYS: u32 = 366;

/// Completion state for the trailing `window_days`-day window ending today.
pub async fn get_progress(
    habit_repo: &dyn HabitRepository,
    ledger: &dyn CompletionLedger,
    clock: &dyn Clock,
    habit_id: &HabitId,
    user_id: &UserId,
    window_days: u32,
) -> Result<Vec<ProgressDayDto>, DomainError> {
    if window_days > MAX_WINDOW_DAYS {
        return Err(DomainError::Validation(format!(
            "Progress window cannot exceed {MAX_WINDOW_DAYS} days"
        )));
    }

    habit_repo
        .find_by_id_for_user(habit_id, user_id)
        .await?
        .ok_or_else(|| DomainError::HabitNotFound(habit_id.to_string()))?;

    let end = clock.today();
    let start = end - Duration::days(window_days as i64);

    let records = ledger.list_in_range(habit_id, start, end).await?;
    if records.is_empty() {
        warn!(
            "[progress] empty window habit_id={} start={} end={}",
            habit_id, start, end
        );
    } else {
        info!(
            "[progress] habit_id={} start={} end={} records={}",
            habit_id,
            start,
            end,
            records.len()
        );
    }

    Ok(project_range(&records, start, end))
}

/// Project ledger records onto every day of the inclusive range. Days with
/// no record come out as not completed. Pure and deterministic.
pub fn project_range(
    records: &[CompletionRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<ProgressDayDto> {
    let completed_by_day: HashMap<NaiveDate, bool> = records
        .iter()
        .map(|record| (record.day(), record.is_completed()))
        .collect();

    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(ProgressDayDto {
            date: current.format("%Y-%m-%d").to_string(),
            completed: completed_by_day.get(&current).copied().unwrap_or(false),
            day_name: current.format("%a").to_string(),
        });
        current += Duration::days(1);
    }

    days
}

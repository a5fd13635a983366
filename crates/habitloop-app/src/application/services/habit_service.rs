use std::sync::Arc;

use futures::future::try_join_all;
use log::info;

use crate::application::dtos::{CreateHabitRequest, HabitCreatedDto, HabitDto};
use habitloop_domain::achievement::{AchievementPolicy, AchievementRecord, AchievementRepository};
use habitloop_domain::completion::CompletionLedger;
use habitloop_domain::habit::{Habit, HabitColor, HabitRepository};
use habitloop_domain::shared::{Clock, DomainError, HabitId, UserId};

/// Habit lifecycle: creation (with the one-time first-habit unlock),
/// listing, and soft deletion.
pub struct HabitService {
    habit_repo: Arc<dyn HabitRepository>,
    ledger: Arc<dyn CompletionLedger>,
    achievement_repo: Arc<dyn AchievementRepository>,
    clock: Arc<dyn Clock>,
}

impl HabitService {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        ledger: Arc<dyn CompletionLedger>,
        achievement_repo: Arc<dyn AchievementRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            habit_repo,
            ledger,
            achievement_repo,
            clock,
        }
    }

    pub async fn create_habit(
        &self,
        user_id: &UserId,
        request: CreateHabitRequest,
    ) -> Result<HabitCreatedDto, DomainError> {
        let color = HabitColor::parse(&request.color)?;
        let habit = Habit::new(
            user_id.clone(),
            request.name,
            request.description,
            color,
            request.icon,
            self.clock.now(),
        )?;

        self.habit_repo.save(&habit).await?;

        let earned = self.achievement_repo.list_earned_kinds(user_id).await?;
        let mut achievement_unlocked = None;
        if let Some(kind) = AchievementPolicy::first_habit_unlock(&earned) {
            let unlock = AchievementRecord::unlock(user_id.clone(), kind, self.clock.now());
            self.achievement_repo.append(&unlock).await?;
            achievement_unlocked = Some(kind.key().to_string());
        }

        info!(
            "[habit] created habit_id={} user_id={} unlocked={:?}",
            habit.id(),
            user_id,
            achievement_unlocked
        );

        Ok(HabitCreatedDto {
            habit: HabitDto::from_habit(&habit, false),
            achievement_unlocked,
        })
    }

    /// A user's active habits, newest first, annotated with today's
    /// completion state.
    pub async fn list_habits(&self, user_id: &UserId) -> Result<Vec<HabitDto>, DomainError> {
        let habits = self.habit_repo.list_active_for_user(user_id).await?;
        let today = self.clock.today();

        let dtos = try_join_all(habits.iter().map(|habit| async move {
            let completed_today = self
                .ledger
                .find_by_habit_and_day(habit.id(), today)
                .await?
                .map(|record| record.is_completed())
                .unwrap_or(false);

            Ok::<_, DomainError>(HabitDto::from_habit(habit, completed_today))
        }))
        .await?;

        Ok(dtos)
    }

    /// Soft delete. The completion history stays in the ledger.
    pub async fn archive_habit(
        &self,
        habit_id: &HabitId,
        user_id: &UserId,
    ) -> Result<(), DomainError> {
        let mut habit = self
            .habit_repo
            .find_by_id_for_user(habit_id, user_id)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(habit_id.to_string()))?;

        habit.archive();
        self.habit_repo.save(&habit).await?;

        info!("[habit] archived habit_id={} user_id={}", habit_id, user_id);
        Ok(())
    }
}

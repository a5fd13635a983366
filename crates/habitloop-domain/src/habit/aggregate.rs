use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::HabitColor;
use crate::shared::{DomainError, HabitId, UserId};
use crate::streak::StreakComputation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    id: HabitId,
    user_id: UserId,
    name: String,
    description: Option<String>,
    color: HabitColor,
    icon: String,
    active: bool,
    current_streak: u32,
    longest_streak: u32,
    last_completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl Habit {
    pub const MAX_NAME_LEN: usize = 100;
    pub const MAX_DESCRIPTION_LEN: usize = 500;

    pub fn new(
        user_id: UserId,
        name: String,
        description: Option<String>,
        color: HabitColor,
        icon: String,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "Habit name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() > Self::MAX_NAME_LEN {
            return Err(DomainError::Validation(format!(
                "Habit name cannot exceed {} characters",
                Self::MAX_NAME_LEN
            )));
        }

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if let Some(d) = &description {
            if d.chars().count() > Self::MAX_DESCRIPTION_LEN {
                return Err(DomainError::Validation(format!(
                    "Habit description cannot exceed {} characters",
                    Self::MAX_DESCRIPTION_LEN
                )));
            }
        }

        if icon.trim().is_empty() {
            return Err(DomainError::Validation(
                "Habit icon cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: HabitId::new(),
            user_id,
            name,
            description,
            color,
            icon: icon.trim().to_string(),
            active: true,
            current_streak: 0,
            longest_streak: 0,
            last_completed_at: None,
            created_at,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: HabitId,
        user_id: UserId,
        name: String,
        description: Option<String>,
        color: HabitColor,
        icon: String,
        active: bool,
        current_streak: u32,
        longest_streak: u32,
        last_completed_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
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
            created_at,
        }
    }

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn color(&self) -> HabitColor {
        self.color
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    pub fn last_completed_at(&self) -> Option<DateTime<Utc>> {
        self.last_completed_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Fold a fresh streak computation into the cached streak state.
    ///
    /// The longest streak never regresses: a recomputation over an edited
    /// ledger may come back lower than what was once observed, so the stored
    /// value is combined with the recomputed one via max.
    pub fn apply_streaks(&mut self, computation: &StreakComputation) {
        self.current_streak = computation.current_streak;
        self.longest_streak = self.longest_streak.max(computation.longest_streak);
    }

    /// Record the instant of a completion toggle that marked a day done.
    pub fn record_completion(&mut self, at: DateTime<Utc>) {
        self.last_completed_at = Some(at);
    }

    /// Soft delete. History and streak state are retained.
    pub fn archive(&mut self) {
        self.active = false;
    }
}

use serde::{Deserialize, Serialize};

/// The fixed achievement catalogue.
///
/// Modeled as a closed set of variants so the milestone scan stays total:
/// adding a milestone means adding a variant, not hunting for literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementKind {
    FirstHabit,
    SevenDayStreak,
    ThirtyDayStreak,
    HundredDayStreak,
}

impl AchievementKind {
    /// Streak milestones in ascending threshold order.
    pub const STREAK_MILESTONES: [AchievementKind; 3] = [
        AchievementKind::SevenDayStreak,
        AchievementKind::ThirtyDayStreak,
        AchievementKind::HundredDayStreak,
    ];

    /// Stable key persisted per (user, kind).
    pub fn key(&self) -> &'static str {
        match self {
            AchievementKind::FirstHabit => "first-habit",
            AchievementKind::SevenDayStreak => "7-day-streak",
            AchievementKind::ThirtyDayStreak => "30-day-streak",
            AchievementKind::HundredDayStreak => "100-day-streak",
        }
    }

    /// Inverse of [`AchievementKind::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "first-habit" => Some(AchievementKind::FirstHabit),
            "7-day-streak" => Some(AchievementKind::SevenDayStreak),
            "30-day-streak" => Some(AchievementKind::ThirtyDayStreak),
            "100-day-streak" => Some(AchievementKind::HundredDayStreak),
            _ => None,
        }
    }

    /// Consecutive-day threshold for streak milestones; `None` for
    /// event-driven achievements.
    pub fn streak_threshold(&self) -> Option<u32> {
        match self {
            AchievementKind::FirstHabit => None,
            AchievementKind::SevenDayStreak => Some(7),
            AchievementKind::ThirtyDayStreak => Some(30),
            AchievementKind::HundredDayStreak => Some(100),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AchievementKind::FirstHabit => "First Step",
            AchievementKind::SevenDayStreak => "Week Warrior",
            AchievementKind::ThirtyDayStreak => "Consistency Champion",
            AchievementKind::HundredDayStreak => "Legendary Streak",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AchievementKind::FirstHabit => "Created your first habit",
            AchievementKind::SevenDayStreak => "Completed 7 days in a row",
            AchievementKind::ThirtyDayStreak => "Completed 30 days in a row",
            AchievementKind::HundredDayStreak => "Completed 100 days in a row",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AchievementKind::FirstHabit => "🎯",
            AchievementKind::SevenDayStreak => "🔥",
            AchievementKind::ThirtyDayStreak => "🏆",
            AchievementKind::HundredDayStreak => "👑",
        }
    }
}

impl std::fmt::Display for AchievementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

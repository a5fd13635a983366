use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleOutcomeDto {
    pub completed: bool,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub achievement_unlocked: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakInfoDto {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub today_completed: bool,
    pub total_completed_days: u32,
}

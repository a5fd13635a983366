use serde::{Deserialize, Serialize};

use habitloop_domain::habit::Habit;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completed_today: bool,
    pub created_at: String, // RFC 3339
}

impl HabitDto {
    pub fn from_habit(habit: &Habit, completed_today: bool) -> Self {
        Self {
            id: habit.id().to_string(),
            name: habit.name().to_string(),
            description: habit.description().map(str::to_string),
            color: habit.color().to_string(),
            icon: habit.icon().to_string(),
            current_streak: habit.current_streak(),
            longest_streak: habit.longest_streak(),
            completed_today,
            created_at: habit.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitCreatedDto {
    pub habit: HabitDto,
    pub achievement_unlocked: Option<String>,
}

mod achievement_queries;
pub mod habit_progress_queries;

pub use achievement_queries::AchievementQueries;
pub use habit_progress_queries::HabitProgressQueries;

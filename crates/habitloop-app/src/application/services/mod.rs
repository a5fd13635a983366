mod completion_service;
mod habit_service;


pub use completion_service::CompletionService;
pub use habit_service::HabitService;

mod aggregate;
mod repository;
mod value_objects;


pub use aggregate::Habit;
pub use repository::HabitRepository;
pub use value_objects::HabitColor;

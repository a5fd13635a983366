mod engine;


pub use engine::{StreakComputation, StreakEngine};

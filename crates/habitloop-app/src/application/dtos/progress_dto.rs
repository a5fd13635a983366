use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressDayDto {
    pub date: String, // YYYY-MM-DD
    pub completed: bool,
    pub day_name: String, // short English weekday, e.g. "Mon"
}

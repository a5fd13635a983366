use serde::{Deserialize, Serialize};

use habitloop_domain::achievement::AchievementRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementDto {
    pub kind: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub earned_at: String, // RFC 3339
}

impl AchievementDto {
    pub fn from_record(record: &AchievementRecord) -> Self {
        Self {
            kind: record.kind().key().to_string(),
            title: record.title().to_string(),
            description: record.description().to_string(),
            icon: record.icon().to_string(),
            earned_at: record.earned_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementSummaryDto {
    pub achievements: Vec<AchievementDto>,
    pub total_streak_days: u32,
}

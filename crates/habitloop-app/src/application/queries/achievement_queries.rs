use std::sync::Arc;

use log::info;

use crate::application::dtos::{AchievementDto, AchievementSummaryDto};
use habitloop_domain::achievement::AchievementRepository;
use habitloop_domain::shared::{DomainError, UserId};
use habitloop_domain::user_stats::UserStatsRepository;

pub struct AchievementQueries {
    achievement_repo: Arc<dyn AchievementRepository>,
    user_stats_repo: Arc<dyn UserStatsRepository>,
}

impl AchievementQueries {
    pub fn new(
        achievement_repo: Arc<dyn AchievementRepository>,
        user_stats_repo: Arc<dyn UserStatsRepository>,
    ) -> Self {
        Self {
            achievement_repo,
            user_stats_repo,
        }
    }

    /// Everything the user has earned plus the best-streak counter.
    pub async fn get_summary(&self, user_id: &UserId) -> Result<AchievementSummaryDto, DomainError> {
        let records = self.achievement_repo.list_for_user(user_id).await?;
        let total_streak_days = self.user_stats_repo.total_streak_days(user_id).await?;

        let dto = AchievementSummaryDto {
            achievements: records.iter().map(AchievementDto::from_record).collect(),
            total_streak_days,
        };

        info!(
            "[achievements] get_summary user_id={} earned={} total_streak_days={}",
            user_id,
            dto.achievements.len(),
            dto.total_streak_days
        );

        Ok(dto)
    }
}

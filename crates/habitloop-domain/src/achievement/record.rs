use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AchievementKind;
use crate::shared::UserId;

/// A one-time unlock owned by the user.
///
/// At most one record exists per (user, kind); records are created once and
/// never mutated or deleted. Title/description/icon are denormalized from
/// the catalogue at unlock time so historical records survive later copy
/// changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementRecord {
    id: String,
    user_id: UserId,
    kind: AchievementKind,
    title: String,
    description: String,
    icon: String,
    earned_at: DateTime<Utc>,
}

impl AchievementRecord {
    pub fn unlock(user_id: UserId, kind: AchievementKind, earned_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            kind,
            title: kind.title().to_string(),
            description: kind.description().to_string(),
            icon: kind.icon().to_string(),
            earned_at,
        }
    }

    pub fn restore(
        id: String,
        user_id: UserId,
        kind: AchievementKind,
        title: String,
        description: String,
        icon: String,
        earned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            kind,
            title,
            description,
            icon,
            earned_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn kind(&self) -> AchievementKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn earned_at(&self) -> DateTime<Utc> {
        self.earned_at
    }
}

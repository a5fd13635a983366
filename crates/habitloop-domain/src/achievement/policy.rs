use std::collections::HashSet;

use super::AchievementKind;

/// Pure achievement-unlock decisions.
///
/// Persisting the unlocked record and bumping the user's aggregate counter
/// are effects the application layer performs after receiving the decision.
pub struct AchievementPolicy;

impl AchievementPolicy {
    /// Decide which streak milestone, if any, a completion event unlocks.
    ///
    /// Scans the milestone table in ascending threshold order and returns
    /// the first reached-but-unearned milestone. At most one unlock per
    /// event: a streak that jumps from 5 to 40 unlocks the 7-day milestone
    /// now and the 30-day milestone on a later event. Un-completion events
    /// and zero streaks never unlock.
    pub fn evaluate_streak_unlock(
        current_streak: u32,
        is_completion_event: bool,
        earned: &HashSet<AchievementKind>,
    ) -> Option<AchievementKind> {
        if !is_completion_event || current_streak == 0 {
            return None;
        }

        AchievementKind::STREAK_MILESTONES
            .iter()
            .copied()
            .find(|kind| {
                kind.streak_threshold()
                    .is_some_and(|threshold| current_streak >= threshold)
                    && !earned.contains(kind)
            })
    }

    /// One-time unlock for creating the user's first habit. Evaluated at
    /// habit-creation time, not in the toggle flow.
    pub fn first_habit_unlock(earned: &HashSet<AchievementKind>) -> Option<AchievementKind> {
        if earned.contains(&AchievementKind::FirstHabit) {
            None
        } else {
            Some(AchievementKind::FirstHabit)
        }
    }
}

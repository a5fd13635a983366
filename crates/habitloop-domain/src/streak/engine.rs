use chrono::NaiveDate;

/// Result of recomputing streaks from the full completed-day history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakComputation {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completed_days: u32,
    pub last_completed_day: Option<NaiveDate>,
}

impl StreakComputation {
    fn empty() -> Self {
        Self {
            current_streak: 0,
            longest_streak: 0,
            total_completed_days: 0,
            last_completed_day: None,
        }
    }
}

/// Pure streak computation over a habit's completed-day history.
///
/// Stateless: everything is derived from the day list and the injected
/// `today`. Callers own the monotonic merge of `longest_streak` with any
/// previously persisted value ([`crate::habit::Habit::apply_streaks`]).
pub struct StreakEngine;

impl StreakEngine {
    /// Compute current and longest streak from completed days.
    ///
    /// The input may arrive in any order and may contain duplicates; it is
    /// normalized to a descending, deduplicated day list first.
    ///
    /// The current streak is alive only while the most recent completed day
    /// is `today` or `today - 1`: a streak survives the owner not having
    /// acted yet today, but breaks once a full day has been skipped. From
    /// that anchor the walk is strictly consecutive and the first gap wider
    /// than one calendar day ends the run.
    ///
    /// The longest streak scans the entire history, not just the current
    /// run.
    pub fn compute(completed_days: &[NaiveDate], today: NaiveDate) -> StreakComputation {
        if completed_days.is_empty() {
            return StreakComputation::empty();
        }

        let mut days = completed_days.to_vec();
        days.sort_unstable_by(|a, b| b.cmp(a));
        days.dedup();

        let most_recent = days[0];

        let mut current_streak = 0u32;
        let anchor_gap = (today - most_recent).num_days();
        if (0..=1).contains(&anchor_gap) {
            current_streak = 1;
            for pair in days.windows(2) {
                if (pair[0] - pair[1]).num_days() == 1 {
                    current_streak += 1;
                } else {
                    break;
                }
            }
        }

        let mut longest_streak = 1u32;
        let mut run = 1u32;
        for pair in days.windows(2) {
            if (pair[0] - pair[1]).num_days() == 1 {
                run += 1;
            } else {
                run = 1;
            }
            longest_streak = longest_streak.max(run);
        }

        StreakComputation {
            current_streak,
            longest_streak,
            total_completed_days: days.len() as u32,
            last_completed_day: Some(most_recent),
        }
    }
}

use chrono::{DateTime, NaiveDate, Utc};

/// Source of "now" and the current calendar day.
///
/// Streak boundaries depend on which calendar day it is, so the clock is an
/// explicit dependency instead of scattered `Utc::now()` reads. Tests inject
/// a [`FixedClock`] to pin the day.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day, timezone-free (UTC day boundary).
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock implementation used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for deterministic streak tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Pin the clock to midnight UTC of the given day.
    pub fn at_day(day: NaiveDate) -> Self {
        Self {
            now: day.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

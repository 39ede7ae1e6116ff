//! Time source for the tracker
//!
//! Period windows and month-to-date figures are anchored at "today"; going
//! through a trait keeps those computations reproducible in tests.

use chrono::{DateTime, Local, NaiveDate, Utc};

pub trait Clock {
    /// Current instant, used for `createdAt`
    fn now(&self) -> DateTime<Utc>;

    /// Current local calendar date
    fn today(&self) -> NaiveDate;
}

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stopped at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Midday UTC on `date`
    pub fn on(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
        Self::new(noon.and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

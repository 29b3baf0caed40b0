//! Source of "today" for due-date classification.

use chrono::{Local, NaiveDate};

/// Provides the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date in the user's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

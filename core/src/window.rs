//! Trailing date windows used to scope every aggregate query.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub const WORKOUT_HISTORY_DAYS: u32 = 30;
pub const CALORIE_AVERAGE_DAYS: u32 = 7;
pub const SLEEP_QUALITY_DAYS: u32 = 30;

/// Inclusive calendar range `[end - days, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    start: NaiveDate,
    end: NaiveDate,
    days: u32,
}

impl Window {
    /// The `days` days leading up to and including `end`.
    pub fn trailing(end: NaiveDate, days: u32) -> Self {
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end, days }
    }

    /// Trailing window ending on the local calendar date.
    pub fn ending_today(days: u32) -> Self {
        Self::trailing(today(), days)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

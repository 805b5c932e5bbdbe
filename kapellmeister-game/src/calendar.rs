//! Game calendar: four-week months, twelve-month years.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const WEEKS_PER_MONTH: u32 = 4;
pub const MONTHS_PER_YEAR: u32 = 12;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A point on the game calendar. Months are zero-based (0 = January),
/// weeks are one-based (1..=4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDate {
    pub year: i32,
    pub month: u32,
    pub week: u32,
}

impl GameDate {
    #[must_use]
    pub const fn new(year: i32, month: u32, week: u32) -> Self {
        Self { year, month, week }
    }

    /// Advance by one week, rolling the month at week > 4 and the year at
    /// month > 11.
    pub fn advance_week(&mut self) {
        self.week += 1;
        if self.week > WEEKS_PER_MONTH {
            self.week = 1;
            self.month += 1;
            if self.month >= MONTHS_PER_YEAR {
                self.month = 0;
                self.year += 1;
            }
        }
    }

    /// Total elapsed weeks since an arbitrary epoch; linear in the
    /// (year, month, week) triple, so differences are meaningful.
    #[must_use]
    pub fn total_weeks(&self) -> i64 {
        let months = i64::from(self.year) * i64::from(MONTHS_PER_YEAR) + i64::from(self.month);
        months * i64::from(WEEKS_PER_MONTH) + i64::from(self.week) - 1
    }

    #[must_use]
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES
            .get(self.month as usize)
            .copied()
            .unwrap_or("January")
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Week {}, {}", self.month_name(), self.week, self.year)
    }
}

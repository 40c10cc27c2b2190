//! Year/month value object.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use super::{DateKey, ValidationError};

/// A single month of a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// Creates a month, validating that `month` is within 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range("month", 1, 12, month as i32));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ValidationError::invalid_format(
                "year",
                format!("{} is outside the supported range", year),
            ));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Calendar year.
    #[cfg(test)]
    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    /// Month number (1..=12).
    #[cfg(test)]
    pub(crate) fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Construction guarantees the first of the month exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        match NaiveDate::from_ymd_opt(next_year, next_month, 1) {
            Some(next) => next.signed_duration_since(self.first_day()).num_days() as u32,
            None => 31,
        }
    }

    /// Whether `date` falls within this month.
    pub fn contains(&self, date: &DateKey) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

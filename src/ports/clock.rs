//! Clock port.
//!
//! The calendar always shows the current month; handlers ask this port what
//! "today" is so tests can pin the month.

use chrono::NaiveDate;

/// Source of the current local date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_object_safe() {
        fn _accepts_dyn(_clock: &dyn Clock) {}
    }
}

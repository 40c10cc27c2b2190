//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod availability;

pub use availability::{
    GetCommonDatesHandler, SaveDatesCommand, SaveDatesHandler, SaveDatesResult,
    ShowCalendarHandler, ShowCalendarQuery, ToggleDateCommand, ToggleDateHandler,
    ToggleDateResult, ToggleOutcome,
};

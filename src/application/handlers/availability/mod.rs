//! Availability handlers.
//!
//! Command and query handlers for drafting, saving and comparing weekends.
//! Handlers that touch drafts take the session store by `&mut`; the
//! dispatcher owns it.

mod get_common_dates;
mod save_dates;
mod show_calendar;
mod toggle_date;

pub use get_common_dates::GetCommonDatesHandler;
pub use save_dates::{SaveDatesCommand, SaveDatesHandler, SaveDatesResult};
pub use show_calendar::{ShowCalendarHandler, ShowCalendarQuery};
pub use toggle_date::{ToggleDateCommand, ToggleDateHandler, ToggleDateResult, ToggleOutcome};

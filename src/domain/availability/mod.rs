//! Weekend availability: draft selections and common-date computation.

mod common_dates;
mod errors;
mod selection;

pub use common_dates::{intersect_all, CommonDates};
pub use errors::AvailabilityError;
pub use selection::{DraftSet, SelectionSessions};

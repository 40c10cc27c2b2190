//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the weekend planner.

mod calendar_month;
mod date_key;
mod errors;
mod ids;

pub use calendar_month::CalendarMonth;
pub use date_key::DateKey;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::UserId;

//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, date keys, months, errors)
//! - `calendar` - Month grid rendering
//! - `availability` - Draft selections and the common-dates intersection

pub mod availability;
pub mod calendar;
pub mod foundation;

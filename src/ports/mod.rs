//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AvailabilityRepository` - Committed date sets per user
//! - `AccessChecker` - Allow-list check applied at the gateway boundary
//! - `Clock` - Current date, used to pick the calendar month

mod access_checker;
mod availability_repository;
mod clock;

pub use access_checker::{AccessChecker, AccessResult};
pub use availability_repository::{AvailabilityRepository, StorageError};
pub use clock::Clock;

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `sqlite` - Durable availability storage
//! - `memory` - In-memory storage for tests and local runs
//! - `access` - Allow-list access checking
//! - `clock` - System and fixed clocks
//! - `http` - The gateway REST endpoint

pub mod access;
pub mod clock;
pub mod http;
pub mod memory;
pub mod sqlite;

pub use access::StaticAllowList;
pub use clock::{FixedClock, SystemClock};
pub use memory::InMemoryAvailabilityRepository;
pub use sqlite::SqliteAvailabilityRepository;

//! In-memory adapters for tests and local development.

mod in_memory_availability_repository;

pub use in_memory_availability_repository::InMemoryAvailabilityRepository;

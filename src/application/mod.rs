//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Gateway events come in through the [`Dispatcher`]; replies go back out as
//! [`Reply`] payloads.

pub mod dispatcher;
pub mod events;
pub mod handlers;
pub mod reply;

pub use dispatcher::Dispatcher;
pub use events::{GatewayEvent, UnknownCallback};
pub use reply::{Button, Keyboard, Reply};

//! HTTP adapter for the messaging gateway.
//!
//! The chat transport forwards every user action here as JSON and renders
//! the returned reply.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, EventKind, InboundEventRequest, InvalidEvent};
pub use handlers::{health, post_event, GatewayAppState};
pub use routes::gateway_routes;

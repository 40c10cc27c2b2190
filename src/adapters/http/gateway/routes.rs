//! HTTP routes for gateway endpoints.

use axum::{routing::post, Router};

use super::handlers::{post_event, GatewayAppState};

/// Creates the gateway router. Mount under `/api/gateway`.
pub fn gateway_routes() -> Router<GatewayAppState> {
    Router::new().route("/events", post(post_event))
}

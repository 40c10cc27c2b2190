//! HTTP adapters - REST API implementations.

pub mod gateway;

use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub use gateway::{gateway_routes, GatewayAppState};

/// Builds the full application router.
pub fn app_router(state: GatewayAppState, request_timeout: Duration) -> Router {
    Router::new()
        .nest("/api/gateway", gateway_routes())
        .route("/health", get(gateway::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
}

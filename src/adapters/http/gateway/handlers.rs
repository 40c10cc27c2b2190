//! HTTP handlers for the gateway endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{Dispatcher, Reply};
use crate::domain::availability::AvailabilityError;
use crate::domain::foundation::DomainError;
use crate::ports::AccessChecker;

use super::dto::{ErrorResponse, InboundEventRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct GatewayAppState {
    dispatcher: Arc<Dispatcher>,
    access_checker: Arc<dyn AccessChecker>,
}

impl GatewayAppState {
    pub fn new(dispatcher: Arc<Dispatcher>, access_checker: Arc<dyn AccessChecker>) -> Self {
        Self {
            dispatcher,
            access_checker,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/gateway/events - Deliver one user action
pub async fn post_event(
    State(state): State<GatewayAppState>,
    Json(req): Json<InboundEventRequest>,
) -> Response {
    let user = req.user();
    if !state.access_checker.check(user).await.is_allowed() {
        tracing::warn!(user_id = %user, "Rejected event from user outside allow-list");
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::forbidden("User is not allowed").with_reply(Reply::access_denied())),
        )
            .into_response();
    }

    let event = match req.into_event() {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(user_id = %user, error = %e, "Rejected malformed event");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::from(DomainError::from(e))),
            )
                .into_response();
        }
    };

    match state.dispatcher.dispatch(event).await {
        Ok(Some(reply)) => (StatusCode::OK, Json(reply)).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_availability_error(e),
    }
}

/// GET /health - Liveness check
pub async fn health() -> &'static str {
    "ok"
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_availability_error(error: AvailabilityError) -> Response {
    match error {
        AvailabilityError::StorageUnavailable(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(
                ErrorResponse::from(DomainError::from(error))
                    .with_reply(Reply::storage_unavailable()),
            ),
        )
            .into_response(),
    }
}

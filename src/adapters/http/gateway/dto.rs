//! HTTP DTOs for the gateway endpoint.
//!
//! These types decouple the wire format from application types.

use serde::{Deserialize, Serialize};

use crate::application::{GatewayEvent, Reply, UnknownCallback};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// How the user interacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Any text message or command.
    Message,
    /// An inline button press; `data` holds its payload.
    Callback,
}

/// A user action forwarded by the chat transport.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundEventRequest {
    pub user_id: i64,
    pub kind: EventKind,
    #[serde(default)]
    pub data: Option<String>,
}

/// Request that cannot be turned into a gateway event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEvent {
    #[error("Callback events require data")]
    MissingCallbackData,

    #[error(transparent)]
    UnknownCallback(#[from] UnknownCallback),
}

impl From<InvalidEvent> for DomainError {
    fn from(err: InvalidEvent) -> Self {
        match err {
            InvalidEvent::MissingCallbackData => DomainError::validation("data", err.to_string()),
            InvalidEvent::UnknownCallback(ref unknown) => {
                DomainError::new(ErrorCode::UnknownAction, err.to_string())
                    .with_detail("data", unknown.0.clone())
            }
        }
    }
}

impl InboundEventRequest {
    pub fn user(&self) -> UserId {
        UserId::new(self.user_id)
    }

    pub fn into_event(self) -> Result<GatewayEvent, InvalidEvent> {
        let user = self.user();
        match self.kind {
            EventKind::Message => Ok(GatewayEvent::UserEntered { user }),
            EventKind::Callback => {
                let data = self.data.ok_or(InvalidEvent::MissingCallbackData)?;
                Ok(GatewayEvent::from_callback(user, &data)?)
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Error body. Carries a user-facing reply when the gateway should still
/// show the user something.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reply: Option<Reply>,
}

impl ErrorResponse {
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Forbidden.to_string(),
            message: message.into(),
            reply: None,
        }
    }

    pub fn with_reply(mut self, reply: Reply) -> Self {
        self.reply = Some(reply);
        self
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message,
            reply: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> InboundEventRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn message_becomes_user_entered() {
        let req = request(serde_json::json!({ "user_id": 5, "kind": "message" }));
        assert_eq!(
            req.into_event().unwrap(),
            GatewayEvent::UserEntered { user: UserId::new(5) }
        );
    }

    #[test]
    fn callback_is_decoded() {
        let req = request(serde_json::json!({
            "user_id": 5,
            "kind": "callback",
            "data": "save_dates"
        }));
        assert_eq!(
            req.into_event().unwrap(),
            GatewayEvent::RequestSave { user: UserId::new(5) }
        );
    }

    #[test]
    fn callback_without_data_is_invalid() {
        let req = request(serde_json::json!({ "user_id": 5, "kind": "callback" }));
        assert_eq!(req.into_event().unwrap_err(), InvalidEvent::MissingCallbackData);
    }

    #[test]
    fn unknown_callback_is_invalid() {
        let req = request(serde_json::json!({
            "user_id": 5,
            "kind": "callback",
            "data": "bogus"
        }));
        assert!(matches!(
            req.into_event(),
            Err(InvalidEvent::UnknownCallback(_))
        ));
    }

    #[test]
    fn error_response_from_domain_error() {
        let err = DomainError::new(ErrorCode::StorageUnavailable, "down");
        let body = ErrorResponse::from(err);
        assert_eq!(body.code, "STORAGE_UNAVAILABLE");
        assert_eq!(body.message, "down");
    }

    #[test]
    fn unknown_callback_maps_to_unknown_action() {
        let err = DomainError::from(InvalidEvent::UnknownCallback(UnknownCallback(
            "bogus".to_string(),
        )));
        assert_eq!(err.code, ErrorCode::UnknownAction);
        assert_eq!(err.details.get("data"), Some(&"bogus".to_string()));
    }

    #[test]
    fn missing_data_maps_to_validation_failure() {
        let err = DomainError::from(InvalidEvent::MissingCallbackData);
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn error_response_omits_missing_reply() {
        let json = serde_json::to_value(ErrorResponse::forbidden("nope")).unwrap();
        assert_eq!(json["code"], "FORBIDDEN");
        assert!(json.get("reply").is_none());
    }
}

//! Inbound gateway events and the callback-data codec.
//!
//! Buttons rendered by [`super::reply`] carry short callback payloads; the
//! gateway echoes them back when pressed and they are decoded here.

use crate::domain::foundation::{DateKey, UserId};

/// Callback payload of the "open calendar" menu button.
pub const CALENDAR: &str = "calendar";
/// Callback payload of the "view common weekends" menu button.
pub const VIEW_WEEKENDS: &str = "view_weekends";
/// Callback payload of the save button under the calendar.
pub const SAVE_DATES: &str = "save_dates";
/// Callback payload of inert buttons (weekday header, blank cells).
pub const IGNORE: &str = "ignore";
/// Prefix of day-cell callback payloads; followed by a `YYYY-MM-DD` key.
pub const DATE_PREFIX: &str = "date_";

/// A discrete user action delivered by the messaging gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    /// Any plain message, including `/start`.
    UserEntered { user: UserId },
    RequestCalendar { user: UserId },
    /// Day-cell press. `date` is the raw payload and may be malformed.
    ToggleDate { user: UserId, date: String },
    RequestSave { user: UserId },
    RequestView { user: UserId },
    /// Press on an inert button.
    Ignored { user: UserId },
}

/// Callback payload the codec does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown callback data: '{0}'")]
pub struct UnknownCallback(pub String);

impl GatewayEvent {
    /// Decodes a button press.
    pub fn from_callback(user: UserId, data: &str) -> Result<Self, UnknownCallback> {
        if let Some(date) = data.strip_prefix(DATE_PREFIX) {
            return Ok(GatewayEvent::ToggleDate {
                user,
                date: date.to_string(),
            });
        }
        match data {
            CALENDAR => Ok(GatewayEvent::RequestCalendar { user }),
            VIEW_WEEKENDS => Ok(GatewayEvent::RequestView { user }),
            SAVE_DATES => Ok(GatewayEvent::RequestSave { user }),
            IGNORE => Ok(GatewayEvent::Ignored { user }),
            other => Err(UnknownCallback(other.to_string())),
        }
    }

    /// The user who triggered the event.
    pub fn user(&self) -> UserId {
        match self {
            GatewayEvent::UserEntered { user }
            | GatewayEvent::RequestCalendar { user }
            | GatewayEvent::ToggleDate { user, .. }
            | GatewayEvent::RequestSave { user }
            | GatewayEvent::RequestView { user }
            | GatewayEvent::Ignored { user } => *user,
        }
    }
}

/// Callback payload for a day cell.
pub fn date_callback(date: &DateKey) -> String {
    format!("{}{}", DATE_PREFIX, date)
}

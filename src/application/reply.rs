//! Outbound replies for the messaging gateway.
//!
//! A reply is display text plus an optional inline keyboard. The gateway
//! either edits the message whose button was pressed (`edit = true`) or
//! sends a new one.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::events::{date_callback, CALENDAR, IGNORE, SAVE_DATES, VIEW_WEEKENDS};
use crate::domain::availability::CommonDates;
use crate::domain::calendar::{Cell, MonthGrid};
use crate::domain::foundation::DateKey;

pub const MENU_TEXT: &str = "Choose an action:";
pub const CALENDAR_TEXT: &str = "Pick your weekends:";
pub const ACCESS_DENIED_TEXT: &str = "❌ Access denied.";
pub const STORAGE_UNAVAILABLE_TEXT: &str = "⚠️ Storage is unavailable, please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "Nobody has saved weekends yet.";
pub const NO_COMMON_DATES_TEXT: &str = "No common weekends.";
pub const COMMON_DATES_HEADER: &str = "Common weekend dates:";

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
const SELECTED_MARK: &str = "✅";

/// One inline button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub callback_data: String,
}

impl Button {
    pub fn new(label: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            callback_data: callback_data.into(),
        }
    }
}

/// Rows of inline buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    /// Buttons in row-major order.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// Payload handed back to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub keyboard: Option<Keyboard>,
    /// Replace the message the pressed button belongs to.
    #[serde(default)]
    pub edit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
            edit: false,
        }
    }

    /// Main menu with the calendar and view buttons.
    pub fn menu() -> Self {
        Self {
            text: MENU_TEXT.to_string(),
            keyboard: Some(Keyboard {
                rows: vec![
                    vec![Button::new("📅 Calendar", CALENDAR)],
                    vec![Button::new("🔍 View weekends", VIEW_WEEKENDS)],
                ],
            }),
            edit: false,
        }
    }

    /// Interactive calendar for the grid's month.
    pub fn calendar(grid: &MonthGrid) -> Self {
        let mut rows: Vec<Vec<Button>> = Vec::with_capacity(grid.weeks().len() + 2);
        rows.push(WEEKDAYS.iter().map(|d| Button::new(*d, IGNORE)).collect());
        for week in grid.weeks() {
            rows.push(
                week.iter()
                    .map(|cell| match cell {
                        Cell::Blank => Button::new(" ", IGNORE),
                        Cell::Day(day) => {
                            let label = if day.selected {
                                format!("{}{}", SELECTED_MARK, day.day)
                            } else {
                                day.day.to_string()
                            };
                            Button::new(label, date_callback(&day.date))
                        }
                    })
                    .collect(),
            );
        }
        rows.push(vec![Button::new("💾 Save", SAVE_DATES)]);

        Self {
            text: CALENDAR_TEXT.to_string(),
            keyboard: Some(Keyboard { rows }),
            edit: true,
        }
    }

    /// Confirmation after a save, listing the saved dates ascending.
    pub fn saved(dates: &BTreeSet<DateKey>) -> Self {
        let listed = if dates.is_empty() {
            "none".to_string()
        } else {
            join(dates.iter(), ", ")
        };
        Self {
            edit: true,
            ..Self::text(format!("✅ Weekends saved: {}", listed))
        }
    }

    /// Result of a common-dates query.
    pub fn common_dates(result: &CommonDates) -> Self {
        match result {
            CommonDates::NoParticipants => Self::text(NO_PARTICIPANTS_TEXT),
            CommonDates::Dates(dates) if dates.is_empty() => Self::text(NO_COMMON_DATES_TEXT),
            CommonDates::Dates(dates) => Self::text(format!(
                "{}\n{}",
                COMMON_DATES_HEADER,
                join(dates.iter(), "\n")
            )),
        }
    }

    pub fn access_denied() -> Self {
        Self::text(ACCESS_DENIED_TEXT)
    }

    pub fn storage_unavailable() -> Self {
        Self::text(STORAGE_UNAVAILABLE_TEXT)
    }
}

fn join<'a>(dates: impl Iterator<Item = &'a DateKey>, separator: &str) -> String {
    dates
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

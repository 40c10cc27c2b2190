//! ToggleDateHandler - Command handler flipping one date in a draft.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::availability::SelectionSessions;
use crate::domain::calendar::{build_grid, MonthGrid};
use crate::domain::foundation::{CalendarMonth, DateKey, UserId};
use crate::ports::Clock;

/// Command to toggle a date.
#[derive(Debug, Clone)]
pub struct ToggleDateCommand {
    pub user: UserId,
    /// Raw payload from the day button.
    pub date: String,
}

/// What the toggle did to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected(DateKey),
    Deselected(DateKey),
    /// Malformed date or a date outside the shown month; draft unchanged.
    Ignored,
}

/// Result of a toggle: the outcome plus the re-rendered calendar.
#[derive(Debug, Clone)]
pub struct ToggleDateResult {
    pub outcome: ToggleOutcome,
    pub grid: MonthGrid,
}

/// Handler for toggling dates.
pub struct ToggleDateHandler {
    clock: Arc<dyn Clock>,
}

impl ToggleDateHandler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn handle(&self, sessions: &mut SelectionSessions, cmd: ToggleDateCommand) -> ToggleDateResult {
        let month = CalendarMonth::of(self.clock.today());

        let outcome = match cmd.date.parse::<DateKey>() {
            Ok(date) if month.contains(&date) => {
                if sessions.toggle(cmd.user, date).contains(&date) {
                    ToggleOutcome::Selected(date)
                } else {
                    ToggleOutcome::Deselected(date)
                }
            }
            Ok(date) => {
                warn!(user_id = %cmd.user, %date, %month, "Ignoring toggle outside shown month");
                ToggleOutcome::Ignored
            }
            Err(e) => {
                warn!(user_id = %cmd.user, payload = %cmd.date, error = %e, "Ignoring malformed date toggle");
                ToggleOutcome::Ignored
            }
        };
        debug!(user_id = %cmd.user, ?outcome, "Toggled date");

        let grid = build_grid(month, sessions.get_or_create(cmd.user));
        ToggleDateResult { outcome, grid }
    }
}

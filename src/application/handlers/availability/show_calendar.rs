//! ShowCalendarHandler - Query handler rendering the current month.

use std::sync::Arc;

use crate::domain::availability::SelectionSessions;
use crate::domain::calendar::{build_grid, MonthGrid};
use crate::domain::foundation::{CalendarMonth, UserId};
use crate::ports::Clock;

/// Query for a user's calendar.
#[derive(Debug, Clone)]
pub struct ShowCalendarQuery {
    pub user: UserId,
}

/// Handler rendering the current month with the user's draft marked.
pub struct ShowCalendarHandler {
    clock: Arc<dyn Clock>,
}

impl ShowCalendarHandler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// The month the calendar currently shows.
    pub fn current_month(&self) -> CalendarMonth {
        CalendarMonth::of(self.clock.today())
    }

    pub fn handle(&self, sessions: &mut SelectionSessions, query: ShowCalendarQuery) -> MonthGrid {
        let draft = sessions.get_or_create(query.user);
        build_grid(self.current_month(), draft)
    }
}

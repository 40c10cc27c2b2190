//! Dispatcher - Routes gateway events to handlers and renders replies.
//!
//! The dispatcher owns the draft session store. Events are applied one at
//! a time under a single lock, so a user's toggles are never reordered and
//! no two handlers see the store at once.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, instrument};

use super::events::GatewayEvent;
use super::handlers::{
    GetCommonDatesHandler, SaveDatesCommand, SaveDatesHandler, ShowCalendarHandler,
    ShowCalendarQuery, ToggleDateCommand, ToggleDateHandler,
};
use super::reply::Reply;
use crate::domain::availability::{AvailabilityError, SelectionSessions};
use crate::ports::{AvailabilityRepository, Clock};

/// Entry point for gateway events.
pub struct Dispatcher {
    sessions: Mutex<SelectionSessions>,
    show_calendar: ShowCalendarHandler,
    toggle_date: ToggleDateHandler,
    save_dates: SaveDatesHandler,
    get_common_dates: GetCommonDatesHandler,
}

impl Dispatcher {
    pub fn new(repository: Arc<dyn AvailabilityRepository>, clock: Arc<dyn Clock>) -> Self {
        Self::with_sessions(SelectionSessions::new(), repository, clock)
    }

    /// Starts from an existing session store.
    pub fn with_sessions(
        sessions: SelectionSessions,
        repository: Arc<dyn AvailabilityRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sessions: Mutex::new(sessions),
            show_calendar: ShowCalendarHandler::new(clock.clone()),
            toggle_date: ToggleDateHandler::new(clock),
            save_dates: SaveDatesHandler::new(repository.clone()),
            get_common_dates: GetCommonDatesHandler::new(repository),
        }
    }

    /// Handles one event. `None` means there is nothing to display.
    #[instrument(skip(self), fields(user_id = %event.user()))]
    pub async fn dispatch(&self, event: GatewayEvent) -> Result<Option<Reply>, AvailabilityError> {
        let mut sessions = self.sessions.lock().await;

        let reply = match event {
            GatewayEvent::UserEntered { user } => {
                sessions.get_or_create(user);
                Reply::menu()
            }
            GatewayEvent::RequestCalendar { user } => {
                let grid = self
                    .show_calendar
                    .handle(&mut sessions, ShowCalendarQuery { user });
                Reply::calendar(&grid)
            }
            GatewayEvent::ToggleDate { user, date } => {
                let result = self
                    .toggle_date
                    .handle(&mut sessions, ToggleDateCommand { user, date });
                Reply::calendar(&result.grid)
            }
            GatewayEvent::RequestSave { user } => {
                let result = self
                    .save_dates
                    .handle(&mut sessions, SaveDatesCommand { user })
                    .await?;
                Reply::saved(&result.saved)
            }
            GatewayEvent::RequestView { .. } => {
                drop(sessions);
                let common = self.get_common_dates.handle().await?;
                Reply::common_dates(&common)
            }
            GatewayEvent::Ignored { .. } => {
                debug!("Inert button pressed");
                return Ok(None);
            }
        };

        Ok(Some(reply))
    }

    /// Number of users with a live draft.
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

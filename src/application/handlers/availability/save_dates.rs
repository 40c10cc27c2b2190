//! SaveDatesHandler - Command handler committing a user's draft.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{error, info};

use crate::domain::availability::{AvailabilityError, SelectionSessions};
use crate::domain::foundation::{DateKey, UserId};
use crate::ports::AvailabilityRepository;

/// Command to save the current draft.
#[derive(Debug, Clone)]
pub struct SaveDatesCommand {
    pub user: UserId,
}

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveDatesResult {
    pub saved: BTreeSet<DateKey>,
}

/// Handler for saving drafts.
///
/// The draft is left in place after saving.
pub struct SaveDatesHandler {
    repository: Arc<dyn AvailabilityRepository>,
}

impl SaveDatesHandler {
    pub fn new(repository: Arc<dyn AvailabilityRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        sessions: &mut SelectionSessions,
        cmd: SaveDatesCommand,
    ) -> Result<SaveDatesResult, AvailabilityError> {
        let draft = sessions.get_or_create(cmd.user).clone();

        self.repository
            .replace_all(cmd.user, &draft)
            .await
            .map_err(|e| {
                error!(user_id = %cmd.user, error = %e, "Failed to save weekends");
                AvailabilityError::from(e)
            })?;

        info!(user_id = %cmd.user, count = draft.len(), "Saved weekends");
        Ok(SaveDatesResult { saved: draft })
    }
}

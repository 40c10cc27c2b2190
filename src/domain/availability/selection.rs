//! Per-user draft selections.

use std::collections::{BTreeSet, HashMap};

use crate::domain::foundation::{DateKey, UserId};

/// The set of dates a user has toggled on but not necessarily saved.
pub type DraftSet = BTreeSet<DateKey>;

/// In-memory drafts, keyed by user.
///
/// Drafts are created lazily on first access and live until the process
/// exits. Saving does not clear a draft, so a later save re-persists the
/// same dates unless the user toggles again.
#[derive(Debug, Clone, Default)]
pub struct SelectionSessions {
    drafts: HashMap<UserId, DraftSet>,
}

impl SelectionSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the draft for `user`, starting an empty one if needed.
    pub fn get_or_create(&mut self, user: UserId) -> &DraftSet {
        self.drafts.entry(user).or_default()
    }

    /// Flips membership of `date` in the draft for `user`.
    pub fn toggle(&mut self, user: UserId, date: DateKey) -> &DraftSet {
        let draft = self.drafts.entry(user).or_default();
        if draft.contains(&date) {
            draft.remove(&date);
        } else {
            draft.insert(date);
        }
        draft
    }

    /// Number of users with a live draft.
    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

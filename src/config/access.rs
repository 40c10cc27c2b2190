//! Access configuration

use serde::Deserialize;
use std::collections::HashSet;

use super::error::ValidationError;
use crate::domain::foundation::UserId;

/// Who may use the planner
#[derive(Debug, Clone, Deserialize)]
pub struct AccessConfig {
    /// Comma-separated numeric user ids
    pub allowed_users: String,
}

impl AccessConfig {
    /// Parse the allow-list. Blank entries are skipped.
    pub fn allowed_user_ids(&self) -> Result<HashSet<UserId>, ValidationError> {
        self.allowed_users
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                entry
                    .parse::<UserId>()
                    .map_err(|_| ValidationError::InvalidUserId(entry.to_string()))
            })
            .collect()
    }

    /// Validate access configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allowed_user_ids()?.is_empty() {
            return Err(ValidationError::MissingRequired("ACCESS__ALLOWED_USERS"));
        }
        Ok(())
    }
}

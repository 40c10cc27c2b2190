//! Availability repository port.
//!
//! Durable mapping from a user to their committed set of dates. The
//! persisted relation is keyed by `(user, date)` with no payload, so a
//! user who saved an empty set leaves no trace and is indistinguishable
//! from one who never saved.
//!
//! # Example
//!
//! ```ignore
//! async fn save(
//!     repo: &dyn AvailabilityRepository,
//!     user: UserId,
//!     draft: &BTreeSet<DateKey>,
//! ) -> Result<(), StorageError> {
//!     repo.replace_all(user, draft).await?;
//!     debug_assert_eq!(&repo.read(user).await?, draft);
//!     Ok(())
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;

use crate::domain::foundation::{DateKey, UserId};

/// Errors that can occur during availability storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupt stored record: {0}")]
    CorruptRecord(String),
}

/// Port for committed availability sets.
///
/// Implementations must make `replace_all` all-or-nothing: a failure part
/// way through must leave the previous committed set visible. No retries
/// are performed at this level.
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Replace the committed set for `user` with `dates`.
    ///
    /// An empty `dates` removes every row for the user.
    ///
    /// # Errors
    /// Returns `StorageError::Unavailable` if the write fails; the previous
    /// committed set is then still in place.
    async fn replace_all(&self, user: UserId, dates: &BTreeSet<DateKey>)
        -> Result<(), StorageError>;

    /// Read the committed set for `user`, empty if never saved.
    async fn read(&self, user: UserId) -> Result<BTreeSet<DateKey>, StorageError>;

    /// Every user with at least one committed date.
    async fn list_users_with_saved_dates(&self) -> Result<BTreeSet<UserId>, StorageError>;

    /// Every non-empty committed set, read as one consistent snapshot.
    ///
    /// A `replace_all` running concurrently is either fully visible or not
    /// visible at all.
    async fn read_all_committed(&self) -> Result<BTreeMap<UserId, BTreeSet<DateKey>>, StorageError>;
}

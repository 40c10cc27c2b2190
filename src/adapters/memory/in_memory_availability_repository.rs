//! In-Memory Availability Repository Adapter
//!
//! Stores committed weekend sets in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DateKey, UserId};
use crate::ports::{AvailabilityRepository, StorageError};

/// In-memory storage for committed weekend sets
#[derive(Debug, Clone, Default)]
pub struct InMemoryAvailabilityRepository {
    committed: Arc<RwLock<HashMap<UserId, BTreeSet<DateKey>>>>,
}

impl InMemoryAvailabilityRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.committed.write().await.clear();
    }

    /// Get the number of stored `(user, date)` rows
    pub async fn row_count(&self) -> usize {
        self.committed.read().await.values().map(BTreeSet::len).sum()
    }
}

#[async_trait]
impl AvailabilityRepository for InMemoryAvailabilityRepository {
    async fn replace_all(
        &self,
        user: UserId,
        dates: &BTreeSet<DateKey>,
    ) -> Result<(), StorageError> {
        let mut committed = self.committed.write().await;
        if dates.is_empty() {
            committed.remove(&user);
        } else {
            committed.insert(user, dates.clone());
        }
        Ok(())
    }

    async fn read(&self, user: UserId) -> Result<BTreeSet<DateKey>, StorageError> {
        let committed = self.committed.read().await;
        Ok(committed.get(&user).cloned().unwrap_or_default())
    }

    async fn list_users_with_saved_dates(&self) -> Result<BTreeSet<UserId>, StorageError> {
        let committed = self.committed.read().await;
        Ok(committed.keys().copied().collect())
    }

    async fn read_all_committed(&self) -> Result<BTreeMap<UserId, BTreeSet<DateKey>>, StorageError> {
        let committed = self.committed.read().await;
        Ok(committed
            .iter()
            .map(|(user, dates)| (*user, dates.clone()))
            .collect())
    }
}

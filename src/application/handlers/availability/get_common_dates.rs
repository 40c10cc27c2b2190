//! GetCommonDatesHandler - Query handler intersecting committed sets.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::availability::{intersect_all, AvailabilityError, CommonDates};
use crate::ports::AvailabilityRepository;

/// Handler computing the dates every participant has saved.
///
/// Reads straight from the repository on every call; commits may land
/// between queries so nothing is cached. All committed sets come from one
/// snapshot, so a concurrent save is seen entirely or not at all.
pub struct GetCommonDatesHandler {
    repository: Arc<dyn AvailabilityRepository>,
}

impl GetCommonDatesHandler {
    pub fn new(repository: Arc<dyn AvailabilityRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<CommonDates, AvailabilityError> {
        self.compute().await.map_err(|e| {
            error!(error = %e, "Failed to compute common weekends");
            e
        })
    }

    async fn compute(&self) -> Result<CommonDates, AvailabilityError> {
        let committed = self.repository.read_all_committed().await?;
        let participants = committed.len();

        let result = intersect_all(committed.into_values());
        debug!(participants, common = result.dates().count(), "Computed common weekends");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAvailabilityRepository;
    use crate::domain::foundation::{DateKey, UserId};
    use crate::ports::StorageError;
    use async_trait::async_trait;
    use std::collections::{BTreeMap, BTreeSet};
    use tokio::sync::Mutex;

    fn set(keys: &[&str]) -> BTreeSet<DateKey> {
        keys.iter().map(|k| k.parse().unwrap()).collect()
    }

    async fn seeded(sets: &[(i64, &[&str])]) -> Arc<InMemoryAvailabilityRepository> {
        let repo = Arc::new(InMemoryAvailabilityRepository::new());
        for (user, dates) in sets {
            repo.replace_all(UserId::new(*user), &set(dates)).await.unwrap();
        }
        repo
    }

    struct UnreadableRepository;

    #[async_trait]
    impl AvailabilityRepository for UnreadableRepository {
        async fn replace_all(
            &self,
            _user: UserId,
            _dates: &BTreeSet<DateKey>,
        ) -> Result<(), StorageError> {
            Ok(())
        }

        async fn read(&self, _user: UserId) -> Result<BTreeSet<DateKey>, StorageError> {
            Err(StorageError::Unavailable("Simulated read failure".to_string()))
        }

        async fn list_users_with_saved_dates(&self) -> Result<BTreeSet<UserId>, StorageError> {
            Ok(BTreeSet::from([UserId::new(1)]))
        }

        async fn read_all_committed(
            &self,
        ) -> Result<BTreeMap<UserId, BTreeSet<DateKey>>, StorageError> {
            Err(StorageError::Unavailable("Simulated read failure".to_string()))
        }
    }

    /// Lets another user's save land right after the first storage call of
    /// the query, the way a concurrent dispatch could.
    struct SaveLandsMidQuery {
        inner: InMemoryAvailabilityRepository,
        pending: Mutex<Option<(UserId, BTreeSet<DateKey>)>>,
    }

    impl SaveLandsMidQuery {
        async fn land_pending_save(&self) {
            if let Some((user, dates)) = self.pending.lock().await.take() {
                self.inner.replace_all(user, &dates).await.unwrap();
            }
        }
    }

    #[async_trait]
    impl AvailabilityRepository for SaveLandsMidQuery {
        async fn replace_all(
            &self,
            user: UserId,
            dates: &BTreeSet<DateKey>,
        ) -> Result<(), StorageError> {
            self.inner.replace_all(user, dates).await
        }

        async fn read(&self, user: UserId) -> Result<BTreeSet<DateKey>, StorageError> {
            let result = self.inner.read(user).await;
            self.land_pending_save().await;
            result
        }

        async fn list_users_with_saved_dates(&self) -> Result<BTreeSet<UserId>, StorageError> {
            let result = self.inner.list_users_with_saved_dates().await;
            self.land_pending_save().await;
            result
        }

        async fn read_all_committed(
            &self,
        ) -> Result<BTreeMap<UserId, BTreeSet<DateKey>>, StorageError> {
            let result = self.inner.read_all_committed().await;
            self.land_pending_save().await;
            result
        }
    }

    #[tokio::test]
    async fn overlapping_sets_intersect() {
        let repo = seeded(&[
            (1, &["2024-06-01", "2024-06-02"]),
            (2, &["2024-06-02", "2024-06-03"]),
        ])
        .await;

        let result = GetCommonDatesHandler::new(repo).handle().await.unwrap();

        assert_eq!(result, CommonDates::Dates(set(&["2024-06-02"])));
    }

    #[tokio::test]
    async fn single_participant_gets_own_set() {
        let repo = seeded(&[(1, &["2024-06-01"])]).await;

        let result = GetCommonDatesHandler::new(repo).handle().await.unwrap();

        assert_eq!(result, CommonDates::Dates(set(&["2024-06-01"])));
    }

    #[tokio::test]
    async fn nobody_saved_is_no_participants() {
        let repo = seeded(&[]).await;

        let result = GetCommonDatesHandler::new(repo).handle().await.unwrap();

        assert_eq!(result, CommonDates::NoParticipants);
    }

    #[tokio::test]
    async fn disjoint_sets_give_empty_dates() {
        let repo = seeded(&[(1, &["2024-06-01"]), (2, &["2024-06-02"])]).await;

        let result = GetCommonDatesHandler::new(repo).handle().await.unwrap();

        assert_eq!(result, CommonDates::Dates(BTreeSet::new()));
    }

    #[tokio::test]
    async fn empty_save_removes_participant() {
        let repo = seeded(&[(1, &["2024-06-01"]), (2, &["2024-06-02"])]).await;
        repo.replace_all(UserId::new(2), &BTreeSet::new()).await.unwrap();

        let result = GetCommonDatesHandler::new(repo).handle().await.unwrap();

        assert_eq!(result, CommonDates::Dates(set(&["2024-06-01"])));
    }

    #[tokio::test]
    async fn recomputes_after_new_commit() {
        let repo = seeded(&[(1, &["2024-06-01", "2024-06-08"])]).await;
        let handler = GetCommonDatesHandler::new(repo.clone());
        assert_eq!(
            handler.handle().await.unwrap(),
            CommonDates::Dates(set(&["2024-06-01", "2024-06-08"]))
        );

        repo.replace_all(UserId::new(2), &set(&["2024-06-08"])).await.unwrap();

        assert_eq!(
            handler.handle().await.unwrap(),
            CommonDates::Dates(set(&["2024-06-08"]))
        );
    }

    #[tokio::test]
    async fn concurrent_save_is_seen_whole_or_not_at_all() {
        let inner = InMemoryAvailabilityRepository::new();
        inner
            .replace_all(UserId::new(1), &set(&["2024-06-01", "2024-06-02"]))
            .await
            .unwrap();
        inner
            .replace_all(UserId::new(2), &set(&["2024-06-02", "2024-06-03"]))
            .await
            .unwrap();
        let repo = Arc::new(SaveLandsMidQuery {
            inner,
            pending: Mutex::new(Some((UserId::new(2), BTreeSet::new()))),
        });

        let result = GetCommonDatesHandler::new(repo.clone()).handle().await.unwrap();

        let before_save = CommonDates::Dates(set(&["2024-06-02"]));
        let after_save = CommonDates::Dates(set(&["2024-06-01", "2024-06-02"]));
        assert!(
            result == before_save || result == after_save,
            "mixed snapshot: {:?}",
            result
        );
        assert!(repo.pending.lock().await.is_none());
    }

    #[tokio::test]
    async fn read_failure_is_storage_unavailable() {
        let result = GetCommonDatesHandler::new(Arc::new(UnreadableRepository))
            .handle()
            .await;
        assert!(matches!(result, Err(AvailabilityError::StorageUnavailable(_))));
    }
}

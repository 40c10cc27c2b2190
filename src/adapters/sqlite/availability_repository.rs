//! SQLite implementation of AvailabilityRepository.
//!
//! Committed sets live in the `weekends` table, one row per `(user_id, date)`.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::foundation::{DateKey, UserId};
use crate::ports::{AvailabilityRepository, StorageError};

/// SQLite implementation of AvailabilityRepository.
#[derive(Clone)]
pub struct SqliteAvailabilityRepository {
    pool: SqlitePool,
}

impl SqliteAvailabilityRepository {
    /// Creates a new SqliteAvailabilityRepository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn unavailable(context: &str, err: sqlx::Error) -> StorageError {
    StorageError::Unavailable(format!("{}: {}", context, err))
}

fn parse_stored_date(user: UserId, raw: &str) -> Result<DateKey, StorageError> {
    raw.parse::<DateKey>().map_err(|e| {
        StorageError::CorruptRecord(format!("user {} date '{}': {}", user, raw, e))
    })
}

#[async_trait]
impl AvailabilityRepository for SqliteAvailabilityRepository {
    async fn replace_all(
        &self,
        user: UserId,
        dates: &BTreeSet<DateKey>,
    ) -> Result<(), StorageError> {
        // Dropping the transaction on any early return rolls it back.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| unavailable("Failed to begin transaction", e))?;

        sqlx::query("DELETE FROM weekends WHERE user_id = ?")
            .bind(user.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| unavailable("Failed to clear weekends", e))?;

        for date in dates {
            sqlx::query("INSERT INTO weekends (user_id, date) VALUES (?, ?)")
                .bind(user.as_i64())
                .bind(date.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|e| unavailable("Failed to insert weekend", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| unavailable("Failed to commit transaction", e))?;

        tracing::debug!(user_id = %user, count = dates.len(), "Replaced committed weekends");
        Ok(())
    }

    async fn read(&self, user: UserId) -> Result<BTreeSet<DateKey>, StorageError> {
        let rows: Vec<String> =
            sqlx::query_scalar("SELECT date FROM weekends WHERE user_id = ? ORDER BY date")
                .bind(user.as_i64())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| unavailable("Failed to fetch weekends", e))?;

        rows.iter().map(|raw| parse_stored_date(user, raw)).collect()
    }

    async fn list_users_with_saved_dates(&self) -> Result<BTreeSet<UserId>, StorageError> {
        let ids: Vec<i64> = sqlx::query_scalar("SELECT DISTINCT user_id FROM weekends")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| unavailable("Failed to list users", e))?;

        Ok(ids.into_iter().map(UserId::new).collect())
    }

    async fn read_all_committed(&self) -> Result<BTreeMap<UserId, BTreeSet<DateKey>>, StorageError> {
        // One statement, so SQLite serves it from a single read snapshot.
        let rows: Vec<(i64, String)> = sqlx::query_as("SELECT user_id, date FROM weekends")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| unavailable("Failed to fetch committed weekends", e))?;

        let mut committed: BTreeMap<UserId, BTreeSet<DateKey>> = BTreeMap::new();
        for (raw_user, raw_date) in rows {
            let user = UserId::new(raw_user);
            let date = parse_stored_date(user, &raw_date)?;
            committed.entry(user).or_default().insert(date);
        }
        Ok(committed)
    }
}

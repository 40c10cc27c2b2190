//! SQLite adapters - Database implementations for repository ports.
//!
//! - `SqliteAvailabilityRepository` - Committed weekend sets
//!
//! The schema is embedded from `migrations/` at compile time.

mod availability_repository;

pub use availability_repository::SqliteAvailabilityRepository;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a connection pool for the configured database file.
///
/// The file and its parent directory are created when missing.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .busy_timeout(config.acquire_timeout());

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_with(options)
        .await
}

/// Applies pending schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn connect_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let config = DatabaseConfig {
            path: dir.path().join("a").join("b").join("weekends.db"),
            ..Default::default()
        };

        let pool = connect(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();

        assert!(config.path.exists());
        pool.close().await;
    }
}

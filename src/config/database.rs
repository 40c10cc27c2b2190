//! Database configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use super::server::MAX_TIMEOUT_SECS;

/// SQLite database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database file; created along with its parent directory if missing
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Maximum connections allowed
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds, also used as the busy timeout
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Run migrations on startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDatabasePath);
        }
        if self.max_connections == 0 || self.max_connections > 100 {
            return Err(ValidationError::InvalidPoolSize);
        }
        if !(1..=MAX_TIMEOUT_SECS).contains(&self.acquire_timeout_secs) {
            return Err(ValidationError::InvalidAcquireTimeout);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            run_migrations: default_run_migrations(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("/data/weekends.db")
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_run_migrations() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, PathBuf::from("/data/weekends.db"));
        assert_eq!(config.max_connections, 5);
        assert!(config.run_migrations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_acquire_timeout_duration() {
        let config = DatabaseConfig {
            acquire_timeout_secs: 10,
            ..Default::default()
        };
        assert_eq!(config.acquire_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_validation_empty_path() {
        let config = DatabaseConfig {
            path: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyDatabasePath));
    }

    #[test]
    fn test_validation_acquire_timeout_bounds() {
        for acquire_timeout_secs in [0, 301] {
            let config = DatabaseConfig {
                acquire_timeout_secs,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidAcquireTimeout)
            );
        }

        let config = DatabaseConfig {
            acquire_timeout_secs: 300,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_pool_size_bounds() {
        for max_connections in [0, 150] {
            let config = DatabaseConfig {
                max_connections,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidPoolSize));
        }
    }
}

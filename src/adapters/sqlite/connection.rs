//! SQLite database connection pool management.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::domain::models::DatabaseConfig;

/// Pool construction failures.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The pool could not be created.
    #[error("Failed to create pool: {0}")]
    PoolCreationFailed(#[source] sqlx::Error),
    /// The configured database path did not parse as a SQLite target.
    #[error("Invalid database path: {0}")]
    InvalidDatabasePath(String),
    /// The parent directory for the database file could not be created.
    #[error("Failed to create directory: {0}")]
    DirectoryCreationFailed(#[source] std::io::Error),
}

/// Create a SQLite connection pool from the database configuration.
///
/// WAL journal mode with a busy timeout, sized from
/// [`DatabaseConfig::max_connections`].
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, ConnectionError> {
    ensure_database_directory(&config.path)?;

    let connect_options = SqliteConnectOptions::from_str(&config.path)
        .map_err(|_| ConnectionError::InvalidDatabasePath(config.path.clone()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(connect_options)
        .await
        .map_err(ConnectionError::PoolCreationFailed)?;

    Ok(pool)
}

/// Create the parent directory of a file-backed database path.
fn ensure_database_directory(database_path: &str) -> Result<(), ConnectionError> {
    let path = database_path.trim_start_matches("sqlite:");
    if path.starts_with(":memory:") || path.contains("mode=memory") {
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(ConnectionError::DirectoryCreationFailed)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_paths_need_no_directory() {
        assert!(ensure_database_directory("sqlite::memory:").is_ok());
        assert!(ensure_database_directory(":memory:").is_ok());
    }

    #[tokio::test]
    async fn creates_in_memory_pool() {
        let config = DatabaseConfig {
            path: "sqlite::memory:".to_string(),
            max_connections: 1,
        };
        let pool = create_pool(&config).await.expect("pool");
        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .expect("query");
        pool.close().await;
    }
}

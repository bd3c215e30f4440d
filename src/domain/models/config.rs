//! Configuration model for the lookup cache and its adapters.

use serde::{Deserialize, Serialize};

/// Main configuration structure for Lookupable
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Database configuration for the SQLite record source
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Remote cache configuration
    #[serde(default)]
    pub remote_cache: RemoteCacheConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Path to `SQLite` database file
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Maximum number of database connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_path() -> String {
    "lookupable.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json, pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files. Stdout-only when unset.
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}

/// Remote cache configuration
///
/// Entries are stored with no expiration; `max_entries` is the backend's own
/// capacity policy, not a TTL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RemoteCacheConfig {
    /// Whether cached lookups should consult the remote layer
    #[serde(default = "default_remote_enabled")]
    pub enabled: bool,

    /// Maximum number of cached collections held by the backend
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
}

const fn default_remote_enabled() -> bool {
    true
}

const fn default_max_entries() -> u64 {
    1024
}

impl Default for RemoteCacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_remote_enabled(),
            max_entries: default_max_entries(),
        }
    }
}

//! Lookupable - Read-Through Lookup Cache
//!
//! Lookupable is a memoization facade for ORM-backed entity types: it caches
//! the full collection of records for an entity type, either for the lifetime
//! of a single process or across processes via a remote, non-expiring cache,
//! and offers accessors that resolve one record or a subset of records by
//! matching a named field against that cached collection.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Record trait, errors, configuration model,
//!   and port definitions
//! - **Service Layer** (`services`): The lookup facade, the local store, and
//!   cache-key derivation
//! - **Adapter Layer** (`adapters`): SQLite record source and the in-process
//!   remote cache
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading and
//!   logging setup
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use lookupable::{LookupCache, LookupStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = LookupStore::new();
//!     let cache = LookupCache::new(source, store);
//!     let country = cache.find_by_or_fail("code", "FR").await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::MokaRemoteCache;
pub use adapters::sqlite::{create_pool, ConnectionError, SqliteRecordSource};
pub use domain::error::{LookupError, LookupResult};
pub use domain::models::{Config, DatabaseConfig, LoggingConfig, Record, RemoteCacheConfig};
pub use domain::ports::{CacheProducer, RecordSource, RemoteCache};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::LoggerHandle;
pub use services::{lookup_key, LookupCache, LookupStore, SUB_KEY_ALL};

//! SQLite-backed record source.

pub mod connection;
pub mod record_source;

pub use connection::{create_pool, ConnectionError};
pub use record_source::SqliteRecordSource;

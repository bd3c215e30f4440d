//! Record source port.

use async_trait::async_trait;

use crate::domain::error::LookupResult;

/// Backing-store query interface for one entity type.
///
/// The implementation owns the actual query machinery (an ORM, a connection
/// pool, a fixture list in tests). The facade only ever asks for the full
/// collection, in the store's natural query order.
#[async_trait]
pub trait RecordSource<T: Send>: Send + Sync {
    /// Fetch all records of the entity type.
    async fn fetch_all(&self) -> LookupResult<Vec<T>>;
}

//! Remote cache port.

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::domain::error::LookupResult;

/// Producer driven on a cache miss. Yields the serialized collection to
/// store under the key.
pub type CacheProducer<'a> = BoxFuture<'a, LookupResult<Vec<u8>>>;

/// External, cross-process, non-expiring key-value cache.
///
/// One primitive: read-through with write-once-per-miss. The producer future
/// must only be driven when the key is absent, and the computed value is
/// stored with no expiration. Concurrent duplicate computation across
/// processes is tolerated; the stored value is deterministic and idempotent
/// to overwrite.
#[async_trait]
pub trait RemoteCache: Send + Sync {
    /// Return the value at `key` if present; otherwise drive `producer`,
    /// store its output forever, and return it. Producer failures propagate
    /// and must not be cached.
    async fn get_or_insert(&self, key: &str, producer: CacheProducer<'_>) -> LookupResult<Vec<u8>>;
}

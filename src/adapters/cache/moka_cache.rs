//! In-process `RemoteCache` backed by a moka future cache.

use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;

use crate::domain::error::{LookupError, LookupResult};
use crate::domain::models::RemoteCacheConfig;
use crate::domain::ports::{CacheProducer, RemoteCache};

/// Non-expiring key-value cache for serialized collections.
///
/// No TTL is configured: entries live until the capacity bound evicts them,
/// which stands in for the external backend's own policy. `get_or_insert`
/// coalesces concurrent producers per key within the process; cross-process
/// duplicate computation stays possible and tolerated.
pub struct MokaRemoteCache {
    inner: Cache<String, Arc<Vec<u8>>>,
}

impl MokaRemoteCache {
    /// Create a cache holding at most `max_entries` collections.
    pub fn new(max_entries: u64) -> Self {
        Self {
            inner: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    /// Create a cache sized from configuration.
    pub fn with_config(config: &RemoteCacheConfig) -> Self {
        Self::new(config.max_entries)
    }

    /// Read the bytes stored under `key` without computing anything.
    pub async fn peek(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.get(key).await.map(|bytes| bytes.as_ref().clone())
    }

    /// Number of entries currently held.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

#[async_trait]
impl RemoteCache for MokaRemoteCache {
    async fn get_or_insert(&self, key: &str, producer: CacheProducer<'_>) -> LookupResult<Vec<u8>> {
        let value = self
            .inner
            .try_get_with(key.to_string(), async move {
                producer.await.map(Arc::new)
            })
            .await
            .map_err(flatten_shared_error)?;

        Ok(value.as_ref().clone())
    }
}

/// `try_get_with` shares the producer error behind an `Arc`; hand the
/// original back when this caller is its only holder.
fn flatten_shared_error(err: Arc<LookupError>) -> LookupError {
    Arc::try_unwrap(err).unwrap_or_else(|shared| LookupError::Cache(shared.to_string()))
}

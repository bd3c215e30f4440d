//! The lookup facade: memoized full-collection fetches plus field-match
//! accessors over the cached collection.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::error::{LookupError, LookupResult};
use crate::domain::models::Record;
use crate::domain::ports::{CacheProducer, RecordSource, RemoteCache};

use super::keys::{lookup_key, SUB_KEY_ALL};
use super::store::LookupStore;

/// Per-entity-type memoization facade.
///
/// Wraps a [`RecordSource`] and resolves lookups against the cached full
/// collection instead of re-querying the backing store. The plain accessors
/// memoize in the local store only; the `*_cached` accessors additionally go
/// through a [`RemoteCache`] shared across processes.
///
/// The facade is read-only with respect to both the cache layers and the
/// backing store: there is no update, delete, or invalidate operation.
pub struct LookupCache<T: Record> {
    entity: &'static str,
    store: LookupStore,
    source: Arc<dyn RecordSource<T>>,
    remote: Option<Arc<dyn RemoteCache>>,
}

impl<T: Record> LookupCache<T> {
    /// Create a facade over `source`, memoizing into `store`.
    pub fn new(source: Arc<dyn RecordSource<T>>, store: LookupStore) -> Self {
        Self {
            entity: T::entity_name(),
            store,
            source,
            remote: None,
        }
    }

    /// Attach a remote cache consulted by the `*_cached` accessors.
    #[must_use]
    pub fn with_remote(mut self, remote: Arc<dyn RemoteCache>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Simple name of the entity type this facade is bound to.
    pub fn entity_name(&self) -> &'static str {
        self.entity
    }

    /// Full collection of records, queried from the backing store at most
    /// once per process.
    pub async fn fetch_all(&self) -> LookupResult<Arc<Vec<T>>> {
        self.from_store(&lookup_key(self.entity, SUB_KEY_ALL), false)
            .await
    }

    /// Same as [`fetch_all`](Self::fetch_all), additionally backed by the
    /// remote cache: on a local miss the remote layer is consulted before
    /// falling back to a full query.
    pub async fn fetch_all_cached(&self) -> LookupResult<Arc<Vec<T>>> {
        self.from_store(&lookup_key(self.entity, SUB_KEY_ALL), true)
            .await
    }

    /// First record whose `field` equals `value`, in natural query order.
    pub async fn find_by(&self, field: &str, value: impl Into<Value>) -> LookupResult<Option<T>> {
        let value = value.into();
        Ok(first_match(&self.fetch_all().await?, field, &value))
    }

    /// Same as [`find_by`](Self::find_by), sourced from the remote-backed
    /// collection.
    pub async fn find_by_cached(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> LookupResult<Option<T>> {
        let value = value.into();
        Ok(first_match(&self.fetch_all_cached().await?, field, &value))
    }

    /// Like [`find_by`](Self::find_by), but a miss is a
    /// [`LookupError::NotFound`] naming the entity type.
    pub async fn find_by_or_fail(&self, field: &str, value: impl Into<Value>) -> LookupResult<T> {
        let value = value.into();
        first_match(&self.fetch_all().await?, field, &value).ok_or_else(|| self.not_found(field, value))
    }

    /// Cached variant of [`find_by_or_fail`](Self::find_by_or_fail).
    pub async fn find_by_cached_or_fail(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> LookupResult<T> {
        let value = value.into();
        first_match(&self.fetch_all_cached().await?, field, &value)
            .ok_or_else(|| self.not_found(field, value))
    }

    /// Records whose `field` value is a member of `values`, in natural query
    /// order. Empty when nothing matches, never an error.
    pub async fn find_many_by(&self, field: &str, values: &[Value]) -> LookupResult<Vec<T>> {
        Ok(member_matches(&self.fetch_all().await?, field, values))
    }

    /// Cached variant of [`find_many_by`](Self::find_many_by).
    pub async fn find_many_by_cached(&self, field: &str, values: &[Value]) -> LookupResult<Vec<T>> {
        Ok(member_matches(&self.fetch_all_cached().await?, field, values))
    }

    /// Memoization primitive.
    ///
    /// A present local entry wins outright, even when the cached collection
    /// is empty. On a miss the collection is computed (through the remote
    /// cache when requested and configured), stored locally, and returned.
    async fn from_store(&self, key: &str, check_remote: bool) -> LookupResult<Arc<Vec<T>>> {
        if let Some(records) = self.store.get::<T>(key) {
            debug!(key, entity = self.entity, "lookup store hit");
            return Ok(records);
        }

        let records = match self.remote.as_ref().filter(|_| check_remote) {
            Some(remote) => {
                debug!(key, entity = self.entity, "lookup store miss, consulting remote cache");
                let source = Arc::clone(&self.source);
                let producer: CacheProducer<'_> = Box::pin(async move {
                    let records = source.fetch_all().await?;
                    let bytes = serde_json::to_vec(&records)?;
                    Ok(bytes)
                });
                let bytes = remote.get_or_insert(key, producer).await?;
                serde_json::from_slice(&bytes)?
            }
            None => {
                debug!(key, entity = self.entity, "lookup store miss, querying backing store");
                self.source.fetch_all().await?
            }
        };

        let records = Arc::new(records);
        self.store.insert(key, Arc::clone(&records));
        Ok(records)
    }

    fn not_found(&self, field: &str, value: Value) -> LookupError {
        LookupError::NotFound {
            entity: self.entity,
            field: field.to_string(),
            value,
        }
    }
}

fn first_match<T: Record>(records: &[T], field: &str, value: &Value) -> Option<T> {
    records
        .iter()
        .find(|record| record.field(field).as_ref() == Some(value))
        .cloned()
}

fn member_matches<T: Record>(records: &[T], field: &str, values: &[Value]) -> Vec<T> {
    records
        .iter()
        .filter(|record| record.field(field).is_some_and(|v| values.contains(&v)))
        .cloned()
        .collect()
}

impl<T: Record> std::fmt::Debug for LookupCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupCache")
            .field("entity", &self.entity)
            .field("store", &self.store)
            .field("remote", &self.remote.is_some())
            .finish()
    }
}

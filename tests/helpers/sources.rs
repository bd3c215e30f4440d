use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use lookupable::{LookupError, LookupResult, RecordSource};

/// In-memory record source that counts how often it is queried.
pub struct CountingSource<T> {
    records: Vec<T>,
    calls: AtomicUsize,
}

impl<T> CountingSource<T> {
    pub fn new(records: Vec<T>) -> Arc<Self> {
        Arc::new(Self {
            records,
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of `fetch_all` invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T> RecordSource<T> for CountingSource<T>
where
    T: Clone + Send + Sync,
{
    async fn fetch_all(&self) -> LookupResult<Vec<T>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

/// Record source whose backing store is always down.
pub struct FailingSource;

#[async_trait]
impl<T: Send> RecordSource<T> for FailingSource {
    async fn fetch_all(&self) -> LookupResult<Vec<T>> {
        Err(LookupError::Store("connection refused".to_string()))
    }
}

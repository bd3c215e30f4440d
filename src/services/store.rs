//! Process-lifetime local memoization store.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared entry map. Values are immutable collections behind `Arc`, so a
/// first-populate race duplicates work but never corrupts state.
type EntryMap = HashMap<String, Arc<dyn Any + Send + Sync>>;

/// In-memory map from cache key to a previously computed record collection.
///
/// An explicit, injectable instance rather than process-global state: create
/// one per process (or per request scope under test) and hand clones to each
/// facade. Clones share the underlying map.
///
/// Presence of a map entry is the memoization marker. An empty collection is
/// a valid cached value and will not trigger recomputation.
///
/// Entries persist for the life of the store; nothing evicts or invalidates
/// them except [`clear`](Self::clear).
#[derive(Clone, Default)]
pub struct LookupStore {
    entries: Arc<RwLock<EntryMap>>,
}

impl LookupStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the collection cached under `key`, if one was stored with the
    /// same element type.
    pub fn get<T>(&self, key: &str) -> Option<Arc<Vec<T>>>
    where
        T: Send + Sync + 'static,
    {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .and_then(|value| Arc::clone(value).downcast::<Vec<T>>().ok())
    }

    /// Store a collection under `key`, replacing any previous entry.
    pub fn insert<T>(&self, key: impl Into<String>, value: Arc<Vec<T>>)
    where
        T: Send + Sync + 'static,
    {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.into(), value);
    }

    /// Drop every entry. Lifecycle hook for tests and request-scoped reuse.
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for LookupStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupStore")
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_returns_typed_collections() {
        let store = LookupStore::new();
        store.insert("country.all", Arc::new(vec!["FR".to_string(), "US".to_string()]));

        let hit = store.get::<String>("country.all").expect("entry present");
        assert_eq!(hit.as_slice(), ["FR".to_string(), "US".to_string()]);
    }

    #[test]
    fn missing_keys_return_none() {
        let store = LookupStore::new();
        assert!(store.get::<String>("country.all").is_none());
    }

    #[test]
    fn type_mismatch_returns_none() {
        let store = LookupStore::new();
        store.insert("country.all", Arc::new(vec![1u32, 2, 3]));
        assert!(store.get::<String>("country.all").is_none());
    }

    #[test]
    fn empty_collections_count_as_present() {
        let store = LookupStore::new();
        store.insert("country.all", Arc::new(Vec::<String>::new()));

        let hit = store.get::<String>("country.all").expect("empty entry present");
        assert!(hit.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_drops_all_entries() {
        let store = LookupStore::new();
        store.insert("country.all", Arc::new(vec![1u32]));
        store.insert("currency.all", Arc::new(vec![2u32]));
        assert_eq!(store.len(), 2);

        store.clear();
        assert!(store.is_empty());
        assert!(store.get::<u32>("country.all").is_none());
    }

    #[test]
    fn clones_share_the_underlying_map() {
        let store = LookupStore::new();
        let other = store.clone();
        store.insert("country.all", Arc::new(vec![1u32]));

        assert!(other.get::<u32>("country.all").is_some());
    }
}

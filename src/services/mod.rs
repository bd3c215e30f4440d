//! Service layer: the lookup facade and its memoization machinery.

pub mod keys;
pub mod lookup_cache;
pub mod store;

pub use keys::{lookup_key, SUB_KEY_ALL};
pub use lookup_cache::LookupCache;
pub use store::LookupStore;

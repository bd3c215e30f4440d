//! Remote-cache adapters.
//!
//! Uses `moka` for concurrent read-through caching. The in-process adapter
//! serves single-node deployments and tests; a networked backend plugs in by
//! implementing the same `RemoteCache` port.

pub mod moka_cache;

pub use moka_cache::MokaRemoteCache;

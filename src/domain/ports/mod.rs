//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interfaces that adapters must
//! implement:
//! - `RecordSource`: full-collection fetch against the backing store (ORM)
//! - `RemoteCache`: non-expiring, cross-process key-value cache
//!
//! These traits define the contracts that allow the lookup facade to be
//! independent of specific infrastructure implementations.

pub mod record_source;
pub mod remote_cache;

pub use record_source::RecordSource;
pub use remote_cache::{CacheProducer, RemoteCache};

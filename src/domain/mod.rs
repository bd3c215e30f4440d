//! Domain layer for the Lookupable lookup cache
//!
//! This module contains the record abstraction, errors, configuration model,
//! and the port traits adapters must implement.

pub mod error;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use error::{LookupError, LookupResult};

//! Domain errors for the lookup cache.

use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by lookup operations and their adapters.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No record of the entity type matched the requested field/value.
    /// Raised only by the `*_or_fail` accessors.
    #[error("{entity} not found where {field} = {value}")]
    NotFound {
        /// Simple name of the entity type the lookup ran against.
        entity: &'static str,
        /// Field the lookup matched on.
        field: String,
        /// Value that had no match.
        value: Value,
    },

    /// Backing-store failure during the full-collection fetch. Propagated
    /// without retry or translation.
    #[error("Backing store error: {0}")]
    Store(String),

    /// Remote-cache failure. No fallback to a direct query is attempted.
    #[error("Remote cache error: {0}")]
    Cache(String),

    /// Encoding or decoding of the cached collection payload failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A record source was constructed with a table name that is not a bare
    /// SQL identifier.
    #[error("Invalid table name: {0}")]
    InvalidTable(String),
}

/// Result alias for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

impl From<sqlx::Error> for LookupError {
    fn from(err: sqlx::Error) -> Self {
        LookupError::Store(err.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn not_found_names_the_entity() {
        let err = LookupError::NotFound {
            entity: "Country",
            field: "code".to_string(),
            value: json!("ZZ"),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("Country"));
        assert!(rendered.contains("code"));
        assert!(rendered.contains("ZZ"));
    }

    #[test]
    fn serde_errors_convert_to_serialization() {
        let bad: Result<Vec<u32>, _> = serde_json::from_str("not json");
        let err: LookupError = bad.unwrap_err().into();
        assert!(matches!(err, LookupError::Serialization(_)));
    }
}

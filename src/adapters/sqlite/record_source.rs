//! SQLite implementation of the `RecordSource` port.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

use crate::domain::error::{LookupError, LookupResult};
use crate::domain::ports::RecordSource;

/// Full-table record source over a SQLite pool.
///
/// Rows map to `T` via `sqlx::FromRow`; the fetch runs `SELECT *` so the
/// collection comes back in the table's natural query order.
#[derive(Clone)]
pub struct SqliteRecordSource<T> {
    pool: SqlitePool,
    query: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> SqliteRecordSource<T> {
    /// Create a source reading every row of `table`.
    ///
    /// The table name is interpolated into the query text and therefore must
    /// be a bare identifier.
    pub fn new(pool: SqlitePool, table: &str) -> LookupResult<Self> {
        if !is_bare_identifier(table) {
            return Err(LookupError::InvalidTable(table.to_string()));
        }

        Ok(Self {
            pool,
            query: format!("SELECT * FROM {table}"),
            _record: PhantomData,
        })
    }
}

#[async_trait]
impl<T> RecordSource<T> for SqliteRecordSource<T>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static,
{
    async fn fetch_all(&self) -> LookupResult<Vec<T>> {
        let records = sqlx::query_as::<_, T>(&self.query)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }
}

fn is_bare_identifier(table: &str) -> bool {
    let mut chars = table.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_identifiers() {
        assert!(is_bare_identifier("countries"));
        assert!(is_bare_identifier("tax_rate_bands"));
        assert!(is_bare_identifier("_staging"));
    }

    #[test]
    fn rejects_anything_else() {
        assert!(!is_bare_identifier(""));
        assert!(!is_bare_identifier("1countries"));
        assert!(!is_bare_identifier("countries; DROP TABLE users"));
        assert!(!is_bare_identifier("countries where"));
    }
}

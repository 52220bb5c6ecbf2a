//! Content store — persistence collaborator for every portfolio record.
//!
//! The store only lists, fetches and writes whole records. Filtering featured
//! items and ordering for display happen in `content`, over a single read per
//! table, so a featured subset is always drawn from the same rows as its full list.

pub mod memory;
pub mod postgres;

use std::cmp::Ordering;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};
use thiserror::Error;

use crate::content::validation::FieldError;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Query type produced by `PgStore` for `INSERT`/`UPDATE ... RETURNING *`.
pub type PgQueryAs<'q, R> = QueryAs<'q, Postgres, R, PgArguments>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Conflicting write on {table}: {message}")]
    Conflict { table: &'static str, message: String },

    #[error("Dangling reference in {table}.{column}")]
    InvalidReference { table: &'static str, column: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt record in {table}: {source}")]
    Corrupt {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A persisted portfolio entity with a surrogate `BIGSERIAL` id.
pub trait Record:
    Clone + Send + Sync + Unpin + Serialize + DeserializeOwned + for<'r> FromRow<'r, PgRow> + 'static
{
    /// SQL table name.
    const TABLE: &'static str;
    /// URL slug under `/api/v1/admin/`.
    const COLLECTION: &'static str;
    /// Writable columns in `bind_columns` order (excludes `id`).
    const COLUMNS: &'static [&'static str];
    /// `(table, column)` pairs holding a nullable reference to this table.
    /// Column names double as the serialized field names.
    const REFERENCED_BY: &'static [(&'static str, &'static str)] = &[];
    /// At most one row may exist.
    const SINGLETON: bool = false;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Field-level checks run before every write.
    fn validate(&self) -> Vec<FieldError>;

    /// Display order shared by the resume view and the admin listing.
    fn display_cmp(&self, other: &Self) -> Ordering;

    /// Binds `COLUMNS`, in order, onto a prepared statement.
    fn bind_columns<'q>(&self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;

    /// Field values matched by the admin `?q=` search.
    fn search_text(&self) -> Vec<&str>;

    /// Outgoing references as `(field, table, id)`, checked before writes.
    fn references(&self) -> Vec<(&'static str, &'static str, i64)> {
        Vec::new()
    }
}

#[async_trait]
pub trait ContentStore: Send + Sync + 'static {
    /// Short backend name reported by `/health`.
    fn backend(&self) -> &'static str;

    /// All records of a table in storage order (ascending id).
    async fn list<R: Record>(&self) -> Result<Vec<R>, StoreError>;

    async fn get<R: Record>(&self, id: i64) -> Result<Option<R>, StoreError>;

    /// Inserts `record`, ignoring its id, and returns it with the assigned id.
    async fn insert<R: Record>(&self, record: R) -> Result<R, StoreError>;

    /// Replaces the writable fields of the record with `record.id()`.
    /// Returns `None` when no such record exists.
    async fn update<R: Record>(&self, record: R) -> Result<Option<R>, StoreError>;

    /// Returns whether a record was removed.
    async fn delete<R: Record>(&self, id: i64) -> Result<bool, StoreError>;

    /// Whether `table` holds a row with `id`.
    async fn exists(&self, table: &'static str, id: i64) -> Result<bool, StoreError>;
}

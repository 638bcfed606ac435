use async_trait::async_trait;

use crate::records::Record;

use super::Result;

/// Storage for one record type, keyed by the record's `id`.
///
/// Writes are unconditional: `put` inserts or overwrites, `delete` succeeds
/// whether or not the record existed.
#[async_trait]
pub trait RecordRepository<R: Record>: Send + Sync {
    /// Returns every stored record, in no particular order.
    async fn list(&self) -> Result<Vec<R>>;

    /// Gets a record by its ID.
    async fn get(&self, id: &str) -> Result<Option<R>>;

    /// Inserts the record, replacing any record with the same ID.
    async fn put(&self, record: &R) -> Result<()>;

    /// Deletes a record by its ID.
    async fn delete(&self, id: &str) -> Result<()>;
}

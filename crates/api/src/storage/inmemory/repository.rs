//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use portfolio_core::records::Record;
use portfolio_core::storage::{RecordRepository, RepositoryError, Result};

/// In-memory storage backend for one record type.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
/// Like a DynamoDB table, it refuses a record whose `id` is empty.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<R> {
    records: Arc<RwLock<HashMap<String, R>>>,
}

impl<R> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> InMemoryRepository<R> {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl<R: Record> RecordRepository<R> for InMemoryRepository<R> {
    async fn list(&self) -> Result<Vec<R>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<R>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn put(&self, record: &R) -> Result<()> {
        if record.id().is_empty() {
            return Err(RepositoryError::QueryFailed(format!(
                "{} key attribute id must not be empty",
                R::ENTITY_TYPE
            )));
        }

        let mut records = self.records.write().await;
        records.insert(record.id().to_string(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.write().await;
        records.remove(id);
        Ok(())
    }
}

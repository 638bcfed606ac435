//! DynamoDB repository implementation.
//!
//! Implements `RecordRepository` from `portfolio_core::storage` with one table
//! per record type, partitioned on the string attribute `id`.

use std::future::Future;
use std::marker::PhantomData;

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::scan::ScanOutput;
use aws_sdk_dynamodb::Client;

use portfolio_core::storage::{RecordRepository, Result};

use super::conversions::{key_for, DynamoItem, Item};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error};

/// DynamoDB-based repository for a single record type.
pub struct DynamoDbRepository<R> {
    client: Client,
    table_name: String,
    _record: PhantomData<fn() -> R>,
}

/// Drives a Scan to completion, one page per `fetch` call.
///
/// A single Scan page is capped at 1 MB, so each page's `LastEvaluatedKey` is
/// passed back as the next `ExclusiveStartKey`. An absent or empty key ends
/// the scan.
async fn scan_pages<R, F, Fut>(mut fetch: F) -> Result<Vec<R>>
where
    R: DynamoItem,
    F: FnMut(Option<Item>) -> Fut,
    Fut: Future<Output = Result<ScanOutput>>,
{
    let mut records = Vec::new();
    let mut start_key = None;

    loop {
        let page = fetch(start_key).await?;

        for item in page.items.unwrap_or_default() {
            records.push(R::from_item(&item)?);
        }

        match page.last_evaluated_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => break,
        }
    }

    Ok(records)
}

impl<R> DynamoDbRepository<R> {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            _record: PhantomData,
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl<R: DynamoItem> RecordRepository<R> for DynamoDbRepository<R> {
    async fn list(&self) -> Result<Vec<R>> {
        scan_pages(|start_key| async move {
            self.client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(|e| map_scan_error(e, &self.table_name))
        })
        .await
    }

    async fn get(&self, id: &str) -> Result<Option<R>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_for(id)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, &self.table_name))?;

        match result.item {
            Some(item) => Ok(Some(R::from_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, record: &R) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record.to_item()))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &self.table_name))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_for(id)))
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, &self.table_name))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, VecDeque};
    use std::future::ready;

    use aws_sdk_dynamodb::types::AttributeValue;
    use portfolio_core::records::Project;
    use portfolio_core::storage::RepositoryError;

    use super::*;

    fn project_item(id: &str) -> Item {
        HashMap::from([
            ("id".to_string(), AttributeValue::S(id.to_string())),
            ("name".to_string(), AttributeValue::S(format!("Project {id}"))),
        ])
    }

    fn page(ids: &[&str], last_evaluated_key: Option<Item>) -> ScanOutput {
        ScanOutput::builder()
            .set_items(Some(ids.iter().map(|id| project_item(id)).collect()))
            .set_last_evaluated_key(last_evaluated_key)
            .build()
    }

    #[tokio::test]
    async fn test_scan_follows_last_evaluated_key() {
        let mut pages = VecDeque::from([
            page(&["p1", "p2"], Some(key_for("p2"))),
            page(&["p3"], None),
        ]);
        let mut requested = Vec::new();

        let projects: Vec<Project> = scan_pages(|start_key| {
            requested.push(start_key);
            ready(Ok(pages.pop_front().unwrap()))
        })
        .await
        .unwrap();

        let ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2", "p3"]);
        assert_eq!(requested, [None, Some(key_for("p2"))]);
    }

    #[tokio::test]
    async fn test_scan_stops_on_empty_last_evaluated_key() {
        let mut calls = 0;

        let projects: Vec<Project> = scan_pages(|_| {
            calls += 1;
            ready(Ok(page(&["p1"], Some(HashMap::new()))))
        })
        .await
        .unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_scan_of_empty_table() {
        let projects: Vec<Project> =
            scan_pages(|_| ready(Ok(ScanOutput::builder().build()))).await.unwrap();

        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn test_scan_error_on_later_page_fails_list() {
        let mut pages = VecDeque::from([
            Ok(page(&["p1"], Some(key_for("p1")))),
            Err(RepositoryError::QueryFailed("throttled".to_string())),
        ]);

        let result: Result<Vec<Project>> =
            scan_pages(|_| ready(pages.pop_front().unwrap())).await;

        assert_eq!(
            result.unwrap_err(),
            RepositoryError::QueryFailed("throttled".to_string())
        );
    }
}

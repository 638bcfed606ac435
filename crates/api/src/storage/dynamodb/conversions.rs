//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and records.
//! These are testable in isolation without DynamoDB access.
//!
//! Every record field is stored under its JSON name. Non-key attributes that
//! are missing or `NULL` read back as empty values; an attribute holding the
//! wrong type is a serialization error.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use portfolio_core::records::{Certification, Project, Record, WorkHistoryItem};
use portfolio_core::storage::RepositoryError;

/// A raw DynamoDB item.
pub type Item = HashMap<String, AttributeValue>;

/// Name of the partition key attribute in every table.
pub const KEY_ATTRIBUTE: &str = "id";

/// Conversion between a record and its DynamoDB item.
pub trait DynamoItem: Record {
    /// Convert the record to a DynamoDB item.
    fn to_item(&self) -> Item;

    /// Convert a DynamoDB item to the record.
    fn from_item(item: &Item) -> Result<Self, RepositoryError>;
}

// ============================================================================
// Project conversions
// ============================================================================

impl DynamoItem for Project {
    fn to_item(&self) -> Item {
        let mut item = HashMap::new();

        put_string(&mut item, KEY_ATTRIBUTE, &self.id);
        put_string(&mut item, "name", &self.name);
        put_string(&mut item, "url", &self.url);
        put_string(&mut item, "imageUrl", &self.image_url);
        put_string(&mut item, "createdAt", &self.created_at);
        put_string(&mut item, "updatedAt", &self.updated_at);

        item
    }

    fn from_item(item: &Item) -> Result<Self, RepositoryError> {
        Ok(Project {
            id: get_key(item)?,
            name: get_string(item, "name")?,
            url: get_string(item, "url")?,
            image_url: get_string(item, "imageUrl")?,
            created_at: get_string(item, "createdAt")?,
            updated_at: get_string(item, "updatedAt")?,
        })
    }
}

// ============================================================================
// Certification conversions
// ============================================================================

impl DynamoItem for Certification {
    fn to_item(&self) -> Item {
        let mut item = HashMap::new();

        put_string(&mut item, KEY_ATTRIBUTE, &self.id);
        put_string(&mut item, "name", &self.name);
        put_string(&mut item, "issuer", &self.issuer);
        put_string(&mut item, "url", &self.url);
        put_string(&mut item, "imageUrl", &self.image_url);
        put_string(&mut item, "createdAt", &self.created_at);
        put_string(&mut item, "updatedAt", &self.updated_at);

        item
    }

    fn from_item(item: &Item) -> Result<Self, RepositoryError> {
        Ok(Certification {
            id: get_key(item)?,
            name: get_string(item, "name")?,
            issuer: get_string(item, "issuer")?,
            url: get_string(item, "url")?,
            image_url: get_string(item, "imageUrl")?,
            created_at: get_string(item, "createdAt")?,
            updated_at: get_string(item, "updatedAt")?,
        })
    }
}

// ============================================================================
// WorkHistoryItem conversions
// ============================================================================

impl DynamoItem for WorkHistoryItem {
    fn to_item(&self) -> Item {
        let mut item = HashMap::new();

        put_string(&mut item, KEY_ATTRIBUTE, &self.id);
        put_string(&mut item, "companyName", &self.company_name);
        put_string(&mut item, "role", &self.role);
        item.insert(
            "skills".to_string(),
            AttributeValue::L(self.skills.iter().cloned().map(AttributeValue::S).collect()),
        );
        put_string(&mut item, "url", &self.url);
        put_string(&mut item, "logoUrl", &self.logo_url);
        put_string(&mut item, "createdAt", &self.created_at);
        put_string(&mut item, "updatedAt", &self.updated_at);

        item
    }

    fn from_item(item: &Item) -> Result<Self, RepositoryError> {
        Ok(WorkHistoryItem {
            id: get_key(item)?,
            company_name: get_string(item, "companyName")?,
            role: get_string(item, "role")?,
            skills: get_string_list(item, "skills")?,
            url: get_string(item, "url")?,
            logo_url: get_string(item, "logoUrl")?,
            created_at: get_string(item, "createdAt")?,
            updated_at: get_string(item, "updatedAt")?,
        })
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Build the key map addressing a single record.
pub fn key_for(id: &str) -> Item {
    HashMap::from([(KEY_ATTRIBUTE.to_string(), AttributeValue::S(id.to_string()))])
}

fn put_string(item: &mut Item, key: &str, value: &str) {
    item.insert(key.to_string(), AttributeValue::S(value.to_string()));
}

/// Get the required partition key attribute.
fn get_key(item: &Item) -> Result<String, RepositoryError> {
    item.get(KEY_ATTRIBUTE)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            RepositoryError::Serialization(format!(
                "Missing or invalid field: {}",
                KEY_ATTRIBUTE
            ))
        })
}

/// Get a string attribute, reading missing or `NULL` as empty.
fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(String::new()),
        Some(AttributeValue::S(s)) => Ok(s.clone()),
        Some(_) => Err(invalid_type(key)),
    }
}

/// Get a list of strings, accepting either a list of `S` or a string set.
fn get_string_list(item: &Item, key: &str) -> Result<Vec<String>, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(Vec::new()),
        Some(AttributeValue::L(values)) => values
            .iter()
            .map(|v| v.as_s().map(|s| s.to_string()).map_err(|_| invalid_type(key)))
            .collect(),
        Some(AttributeValue::Ss(values)) => Ok(values.clone()),
        Some(_) => Err(invalid_type(key)),
    }
}

fn invalid_type(key: &str) -> RepositoryError {
    RepositoryError::Serialization(format!("Invalid type for field: {}", key))
}

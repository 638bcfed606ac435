mod certification;
mod error;
mod project;
mod work_history;

use serde::{de::DeserializeOwned, Serialize};

pub use certification::Certification;
pub use error::RecordError;
pub use project::Project;
pub use work_history::WorkHistoryItem;

/// A flat record stored in its own table and keyed by a string `id`.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Human-readable entity name used in error messages and logs.
    const ENTITY_TYPE: &'static str;

    /// The record's identifying attribute.
    fn id(&self) -> &str;
}

/// Decodes a request body into a record.
///
/// The body is parsed as JSON whatever `Content-Type` the client sent.
pub fn decode_record<R: Record>(body: &[u8]) -> Result<R, RecordError> {
    serde_json::from_slice(body).map_err(|e| RecordError::InvalidBody(e.to_string()))
}

/// Checks that the id carried in a replacement body matches the id in the URL.
///
/// This is the only cross-field rule in the API.
pub fn ensure_id_matches<R: Record>(path_id: &str, record: &R) -> Result<(), RecordError> {
    if record.id() != path_id {
        return Err(RecordError::IdMismatch {
            path_id: path_id.to_string(),
            body_id: record.id().to_string(),
        });
    }
    Ok(())
}

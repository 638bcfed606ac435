use thiserror::Error;

/// Errors raised when validating a record against its request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("ID in body must match URL parameter (url: {path_id}, body: {body_id})")]
    IdMismatch { path_id: String, body_id: String },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

//! In-memory storage backend.
//!
//! Used by the test suite, and by the server itself when it is built without
//! the `dynamodb` feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::InMemoryRepository;
//!
//! let repo: InMemoryRepository<Project> = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;

//! Storage backend implementations.
//!
//! This module provides concrete implementations of `RecordRepository` from
//! `portfolio_core::storage`. The backend is selected at compile time via
//! feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! Without `dynamodb` the server falls back to the in-memory backend, which
//! is also what the test suite runs against.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p portfolio_api
//! ```
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p portfolio_api --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, not(feature = "dynamodb")))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg(any(test, not(feature = "dynamodb")))]
pub use inmemory::InMemoryRepository;

//! Core types for the portfolio records API.
//!
//! Everything in this crate is pure: record shapes, the repository contract
//! the HTTP layer talks to, and the mapping from storage errors to status
//! codes. Backends and the HTTP shell live in `portfolio_api`.

pub mod records;
pub mod serde;
pub mod storage;

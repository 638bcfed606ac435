//! Serde helper functions for record deserialization.
//!
//! Request bodies come from loosely-typed clients, so an explicit JSON `null`
//! is accepted wherever a field may be omitted and decodes to the same empty
//! value.

use serde::{Deserialize, Deserializer};

/// Deserialize a value, treating `null` as the type's default.
pub fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

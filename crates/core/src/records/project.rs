use serde::{Deserialize, Serialize};

use crate::serde::deserialize_null_as_default;

use super::Record;

/// A portfolio project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub image_url: String,
    /// Opaque, caller-supplied timestamp.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub created_at: String,
    /// Opaque, caller-supplied timestamp.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub updated_at: String,
}

impl Record for Project {
    const ENTITY_TYPE: &'static str = "Project";

    fn id(&self) -> &str {
        &self.id
    }
}

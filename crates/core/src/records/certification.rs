use serde::{Deserialize, Serialize};

use crate::serde::deserialize_null_as_default;

use super::Record;

/// A certification and the body that issued it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub issuer: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub updated_at: String,
}

impl Record for Certification {
    const ENTITY_TYPE: &'static str = "Certification";

    fn id(&self) -> &str {
        &self.id
    }
}

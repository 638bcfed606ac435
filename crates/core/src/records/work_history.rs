use serde::{Deserialize, Serialize};

use crate::serde::deserialize_null_as_default;

use super::Record;

/// A position held at a company, with the skills used there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHistoryItem {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub company_name: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub role: String,
    /// Kept in the order the caller sent them.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub logo_url: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub updated_at: String,
}

impl Record for WorkHistoryItem {
    const ENTITY_TYPE: &'static str = "WorkHistoryItem";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_history_item_keeps_skill_order() {
        let json = r#"{
            "id": "w1",
            "companyName": "Acme",
            "role": "Engineer",
            "skills": ["Go", "Rust", "AWS"],
            "logoUrl": "https://acme.test/logo.png"
        }"#;

        let item: WorkHistoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.company_name, "Acme");
        assert_eq!(item.skills, vec!["Go", "Rust", "AWS"]);
        assert_eq!(item.logo_url, "https://acme.test/logo.png");
        assert_eq!(item.url, "");
    }

    #[test]
    fn test_work_history_item_serializes_empty_skills_as_array() {
        let item = WorkHistoryItem {
            id: "w1".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["skills"], serde_json::json!([]));
        assert_eq!(json["companyName"], "");
    }

    #[test]
    fn test_work_history_item_rejects_non_string_skills() {
        let json = r#"{"id": "w1", "skills": [1, 2]}"#;
        assert!(serde_json::from_str::<WorkHistoryItem>(json).is_err());
    }
}

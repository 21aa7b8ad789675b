//! Data model for the to-do list.
//!
//! Field names serialize in PascalCase so `todos.json` files written by
//! other front ends of the same list load without conversion.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reserved id carried by a row that has not been persisted yet.
pub const DRAFT_ID: Uuid = Uuid::nil();

/// Title given to a freshly created draft.
pub const DEFAULT_DRAFT_TITLE: &str = "New Todo";

/// A single to-do record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ToDoItem {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default = "Local::now")]
    pub creation_date: DateTime<Local>,
}

impl ToDoItem {
    /// Create a persisted-looking item with a fresh id.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            is_completed: false,
            creation_date: Local::now(),
        }
    }

    /// Create the unsaved draft row inserted by "add".
    pub fn draft() -> Self {
        Self {
            id: DRAFT_ID,
            title: DEFAULT_DRAFT_TITLE.to_string(),
            description: String::new(),
            is_completed: false,
            creation_date: Local::now(),
        }
    }

    /// Builder-style helper for fixtures.
    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// True while the item has never reached the store.
    pub fn is_draft(&self) -> bool {
        self.id == DRAFT_ID
    }
}

impl Default for ToDoItem {
    fn default() -> Self {
        Self {
            id: DRAFT_ID,
            title: String::new(),
            description: String::new(),
            is_completed: false,
            creation_date: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft = ToDoItem::draft();
        assert!(draft.is_draft());
        assert_eq!(draft.title, "New Todo");
        assert!(draft.description.is_empty());
        assert!(!draft.is_completed);
    }

    #[test]
    fn test_new_item_is_not_draft() {
        let item = ToDoItem::new("Buy milk", "2 liters");
        assert!(!item.is_draft());
        assert_ne!(item.id, DRAFT_ID);
    }

    #[test]
    fn test_serializes_pascal_case() {
        let item = ToDoItem::new("Title", "Desc").completed(true);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["Title"], "Title");
        assert_eq!(json["Description"], "Desc");
        assert_eq!(json["IsCompleted"], true);
        assert!(json.get("CreationDate").is_some());
        assert!(json.get("Id").is_some());
    }

    #[test]
    fn test_deserializes_with_missing_optional_fields() {
        let json = r#"{"Id":"6f1c2d8e-3b4a-4c5d-9e8f-0a1b2c3d4e5f","Title":"Only title"}"#;
        let item: ToDoItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, "Only title");
        assert!(item.description.is_empty());
        assert!(!item.is_completed);
    }

    #[test]
    fn test_deserializes_offset_timestamp() {
        let json = r#"{
            "Id": "6f1c2d8e-3b4a-4c5d-9e8f-0a1b2c3d4e5f",
            "Title": "Dated",
            "Description": "",
            "IsCompleted": false,
            "CreationDate": "2024-03-01T09:30:00.1234567+02:00"
        }"#;
        let item: ToDoItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.creation_date.timestamp(), 1709278200);
    }
}

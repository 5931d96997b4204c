//! Category records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Named grouping for questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    /// Category name, stored in the `type` column
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Category id to type, as rendered by the listing endpoints.
///
/// Ordered by id; serde_json renders the integer keys as strings.
pub type CategoryMap = BTreeMap<i32, String>;

/// Collapse categories into the id -> type map.
pub fn category_map(categories: impl IntoIterator<Item = Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_renders_string_keys_in_id_order() {
        let map = category_map(vec![Category::new(2, "Art"), Category::new(1, "Science")]);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(Category::new(4, "History")).unwrap();
        assert_eq!(json["type"], "History");
        assert!(json.get("kind").is_none());
    }
}

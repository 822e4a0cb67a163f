use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Shopping-list entries arrive either as plain strings or as objects
/// with a `name` field; anything else is skipped, not rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CartItemInput {
    Named { name: String },
    Plain(String),
    Other(serde_json::Value),
}

impl CartItemInput {
    pub fn into_name(self) -> Option<String> {
        match self {
            CartItemInput::Named { name } => Some(name),
            CartItemInput::Plain(name) => Some(name),
            CartItemInput::Other(_) => None,
        }
    }
}

/// Normalize a raw list to item names, dropping invalid entries.
pub fn normalize_items(items: Vec<CartItemInput>) -> Vec<String> {
    items.into_iter().filter_map(CartItemInput::into_name).collect()
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ProcessCartRequest {
    /// Item names, or objects carrying a `name` field.
    #[serde(rename = "shoppingList", default)]
    #[schema(value_type = Vec<Object>)]
    pub shopping_list: Vec<CartItemInput>,
    /// Profile document to flag against; may be arbitrarily nested.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub profile: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mixed_list_normalizes() {
        let request: ProcessCartRequest = serde_json::from_value(json!({
            "shoppingList": ["milk", {"name": "bread", "qty": 2}, 42],
            "profile": {"allergies": []}
        }))
        .unwrap();

        let items = normalize_items(request.shopping_list);
        assert_eq!(items, vec!["milk".to_string(), "bread".to_string()]);
    }

    #[test]
    fn test_missing_fields_default() {
        let request: ProcessCartRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.shopping_list.is_empty());
        assert!(request.profile.is_null());
    }
}

//! Reusable schema fragments.
//!
//! Fragment definitions are plain JSON literals handed to a [`SchemaEngine`],
//! which owns whatever validation or documentation happens afterwards.

use serde::Serialize;
use serde_json::{json, Value};

pub const EXPAND_FRAGMENT: &str = "ExpandFragment";
pub const USER_FRAGMENT: &str = "UserFragment";

/// Builds named fragments from definition literals.
pub trait SchemaEngine {
    type Fragment;

    fn schema(&self, definition: Value, name: &str) -> Self::Fragment;
}

/// Array of strings restricted to `fields`, serialized form style
/// (`expand=a,b`). Optionality belongs to the parent schema's key.
pub fn expand_fragment_definition<S: AsRef<str>>(fields: &[S]) -> Value {
    let allowed: Vec<&str> = fields.iter().map(AsRef::as_ref).collect();

    json!({
        "description": "Expand associated records.",
        "items": {
            "enum": allowed,
            "type": "string",
        },
        "style": "form",
        "type": "array",
    })
}

/// Minimal public shape of a user reference.
pub fn user_fragment_definition() -> Value {
    json!({
        "type": "object",
        "properties": {
            "userID": {
                "type": "integer",
                "description": "The ID of the user.",
            },
            "name": {
                "type": "string",
                "description": "The username of the user.",
            },
            "photoUrl": {
                "type": "string",
                "description": "The URL of the user's avatar picture.",
            },
        },
        "required": ["userID", "name", "photoUrl"],
    })
}

/// Schema engine that stores definitions as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaEngine;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonSchemaFragment {
    pub id: String,
    pub definition: Value,
}

impl SchemaEngine for JsonSchemaEngine {
    type Fragment = JsonSchemaFragment;

    fn schema(&self, definition: Value, name: &str) -> JsonSchemaFragment {
        JsonSchemaFragment {
            id: name.to_string(),
            definition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_fragment_is_array_schema() {
        let definition = expand_fragment_definition(&["insertUser", "updateUser"]);

        assert_eq!(definition["type"], "array");
        assert_eq!(definition["style"], "form");
        assert_eq!(definition["items"]["type"], "string");
        assert_eq!(definition["items"]["enum"], json!(["insertUser", "updateUser"]));

        let keys: Vec<&str> = definition
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["description", "items", "style", "type"]);
    }

    #[test]
    fn test_user_fragment_shape() {
        let definition = user_fragment_definition();
        let properties = definition["properties"].as_object().unwrap();

        let names: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["userID", "name", "photoUrl"]);
        assert_eq!(properties["userID"]["type"], "integer");
        assert_eq!(properties["name"]["type"], "string");
        assert_eq!(properties["photoUrl"]["type"], "string");
    }

    #[test]
    fn test_json_engine_names_fragment() {
        let fragment = JsonSchemaEngine.schema(user_fragment_definition(), USER_FRAGMENT);
        assert_eq!(fragment.id, "UserFragment");
        assert_eq!(fragment.definition, user_fragment_definition());
    }
}

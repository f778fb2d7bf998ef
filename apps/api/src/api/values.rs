//! Request value helpers.

use serde_json::{Map, Value};

/// A decoded request body or query string, in submission order.
pub type RequestData = Map<String, Value>;

/// Drop every entry whose value is exactly the empty string.
///
/// `null`, `0`, `false` and empty containers are kept. Surviving keys keep
/// their original order.
pub fn filter_values(values: RequestData) -> RequestData {
    values
        .into_iter()
        .filter(|(_, value)| !is_empty_string(value))
        .collect()
}

fn is_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}

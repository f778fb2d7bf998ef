//! Field display formatting.

use serde_json::Value;

use crate::api::values::RequestData;

/// Converts a stored value into its display form for a named format.
pub trait FieldFormatter {
    fn convert(&self, value: &Value, format: &str) -> String;
}

/// Replace `row[field]` with its formatted value, if the field is present.
///
/// A falsy conversion result (`""` or `"0"`) is replaced by `placeholder` so
/// renderers never receive an empty value for a field that was asked to be
/// formatted.
pub fn format_field<F>(
    formatter: &F,
    row: &mut RequestData,
    field: &str,
    format: &str,
    placeholder: &str,
) where
    F: FieldFormatter + ?Sized,
{
    let Some(value) = row.get_mut(field) else {
        return;
    };

    let formatted = formatter.convert(value, format);
    *value = if is_falsy(&formatted) {
        tracing::debug!(
            field = %field,
            format = %format,
            "Formatted value is empty, using placeholder"
        );
        Value::String(placeholder.to_string())
    } else {
        Value::String(formatted)
    };
}

fn is_falsy(formatted: &str) -> bool {
    formatted.is_empty() || formatted == "0"
}

/// Small built-in formatter.
///
/// - `html` and `raw` pass the value through unchanged
/// - `display` escapes HTML and turns newlines into `<br />`
/// - anything else, including `text`, escapes HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl FieldFormatter for TextFormatter {
    fn convert(&self, value: &Value, format: &str) -> String {
        let text = match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        match format.to_ascii_lowercase().as_str() {
            "html" | "raw" => text,
            "display" => html_escape::encode_text(&text).replace('\n', "<br />\n"),
            _ => html_escape::encode_text(&text).into_owned(),
        }
    }
}

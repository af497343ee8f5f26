use serde_json::Value;

const MAX_ARRAY_LENGTH: usize = 10;
const MAX_RECURSIVE_DEPTH: usize = 2;

/// Renders an arbitrary JSON value for use in error messages.
///
/// Strings are quoted, objects print as `{ key: value }`, arrays beyond ten
/// items are truncated, and containers nested more than two levels deep
/// collapse to `[Object]` / `[Array]`.
///
/// ```
/// use libgraphql_language::inspect;
/// use serde_json::json;
///
/// assert_eq!(inspect(&json!({"random": "Object"})), r#"{ random: "Object" }"#);
/// assert_eq!(inspect(&json!({"a": {"b": {"c": 1}}})), "{ a: { b: [Object] } }");
/// ```
pub fn inspect(value: &Value) -> String {
    format_value(value, 0)
}

fn format_value(value: &Value, depth: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(boolean) => boolean.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(string) => {
            serde_json::to_string(string).unwrap_or_else(|_| format!("\"{string}\""))
        },
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            if depth >= MAX_RECURSIVE_DEPTH {
                return "[Array]".to_string();
            }
            let shown = items.len().min(MAX_ARRAY_LENGTH);
            let mut parts: Vec<String> = items[..shown]
                .iter()
                .map(|item| format_value(item, depth + 1))
                .collect();
            match items.len() - shown {
                0 => {},
                1 => parts.push("... 1 more item".to_string()),
                remaining => parts.push(format!("... {remaining} more items")),
            }
            format!("[{}]", parts.join(", "))
        },
        Value::Object(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            if depth >= MAX_RECURSIVE_DEPTH {
                return "[Object]".to_string();
            }
            let properties: Vec<String> = map
                .iter()
                .map(|(key, value)| format!("{key}: {}", format_value(value, depth + 1)))
                .collect();
            format!("{{ {} }}", properties.join(", "))
        },
    }
}

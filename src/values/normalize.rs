use serde_json::Value;

/// Characters stripped from both ends of submitted strings. Other Unicode
/// whitespace (e.g. NBSP) is kept as content.
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Trim a submitted value for consumers.
///
/// Strings are trimmed; arrays get each string item trimmed with other
/// items left alone; every other value passes through.
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(trim(s).to_string()),
        Value::Array(items) => Value::Array(items.iter().map(trim_item).collect()),
        other => other.clone(),
    }
}

fn trim_item(item: &Value) -> Value {
    match item {
        Value::String(s) => Value::String(trim(s).to_string()),
        other => other.clone(),
    }
}

fn trim(s: &str) -> &str {
    s.trim_matches(TRIMMED)
}

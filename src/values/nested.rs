use serde_json::Value;

use crate::form::path::{ParentPath, PathKey};

/// Follow `path` down from `structure`.
///
/// `None` means some segment was missing. A present `null` comes back as
/// `Some(&Value::Null)`, never as `None`.
pub fn nested_value<'a>(structure: &'a Value, path: &ParentPath) -> Option<&'a Value> {
    path.keys()
        .iter()
        .try_fold(structure, |current, key| member(current, key))
}

pub fn key_exists(structure: &Value, path: &ParentPath) -> bool {
    nested_value(structure, path).is_some()
}

fn member<'a>(container: &'a Value, key: &PathKey) -> Option<&'a Value> {
    match container {
        Value::Object(map) => match key {
            PathKey::Name(name) => map.get(name),
            PathKey::Index(i) => map.get(&i.to_string()),
        },
        Value::Array(items) => key.as_index().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Whether a resolved value is structure belonging to descendant elements
/// rather than a value of its own.
///
/// Objects are always structure. Arrays of scalars are multi-valued leaves
/// (e.g. a multi-select); an array holding any object or array is structure.
pub fn is_composite(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::Array(items) => items
            .iter()
            .any(|v| matches!(v, Value::Object(_) | Value::Array(_))),
        _ => false,
    }
}

use serde_json::Value;

static NO_VALUES: Value = Value::Null;

/// Where submitted values come from.
pub trait Submission {
    fn values(&self) -> &Value;

    /// Were any values submitted at all.
    ///
    /// Tells a form that was never submitted apart from one submitted with
    /// every field left empty: the latter still carries its field keys.
    fn exists(&self) -> bool {
        is_truthy(self.values())
    }
}

impl Submission for Value {
    fn values(&self) -> &Value {
        self
    }
}

/// Submitted values as handed over by request handling, which may have none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmittedValues {
    values: Option<Value>,
}

impl SubmittedValues {
    pub fn new(values: Value) -> Self {
        Self {
            values: Some(values),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

impl Submission for SubmittedValues {
    fn values(&self) -> &Value {
        self.values.as_ref().unwrap_or(&NO_VALUES)
    }

    fn exists(&self) -> bool {
        self.values.as_ref().is_some_and(is_truthy)
    }
}

/// Loose truthiness as request handling reports it: nulls, `false`, zero,
/// `""`, `"0"` and empty containers all count as nothing submitted.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

use serde::Serialize;
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::form::{element_model::ElementHash, path::ParentPath};

#[derive(Debug, Clone, Serialize)]
pub struct BindEvent {
    pub timestamp_ms: u128,
    pub step: u64,

    pub hash: String,
    pub parents: Vec<String>,

    pub outcome: BindOutcome,
    pub value_kind: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BindOutcome {
    Bound,
    Absent,
}

impl BindEvent {
    pub fn now(step: u64, hash: &ElementHash) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            step,
            hash: hash.to_string(),
            parents: vec![],
            outcome: BindOutcome::Absent,
            value_kind: None,
        }
    }

    pub fn with_parents(mut self, parents: &ParentPath) -> Self {
        self.parents = parents.segments();
        self
    }

    pub fn with_value(mut self, value: Option<&Value>) -> Self {
        match value {
            Some(v) => {
                self.outcome = BindOutcome::Bound;
                self.value_kind = Some(value_kind(v).to_string());
            }
            None => {
                self.outcome = BindOutcome::Absent;
                self.value_kind = None;
            }
        }
        self
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

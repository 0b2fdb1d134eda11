use std::fmt;

use serde::{Deserialize, Serialize};

/// One step from a value structure into one of its members.
///
/// Submitted maps mix named keys with positional ones, so a segment is
/// either a member name or an index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathKey {
    Index(usize),
    Name(String),
}

impl PathKey {
    /// Index this key addresses inside a sequence, if any.
    ///
    /// Named keys in canonical decimal count too: `"2"` reaches the third
    /// item, while `"02"` and `"+2"` are plain names and reach nothing.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathKey::Index(i) => Some(*i),
            PathKey::Name(name) if is_canonical_index(name) => name.parse().ok(),
            PathKey::Name(_) => None,
        }
    }
}

fn is_canonical_index(name: &str) -> bool {
    name == "0"
        || (!name.is_empty()
            && !name.starts_with('0')
            && name.bytes().all(|b| b.is_ascii_digit()))
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKey::Index(i) => write!(f, "{}", i),
            PathKey::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<&str> for PathKey {
    fn from(name: &str) -> Self {
        PathKey::Name(name.to_string())
    }
}

impl From<String> for PathKey {
    fn from(name: String) -> Self {
        PathKey::Name(name)
    }
}

impl From<usize> for PathKey {
    fn from(index: usize) -> Self {
        PathKey::Index(index)
    }
}

/// Chain of keys leading from the root of a submission to one element's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParentPath(pub Vec<PathKey>);

impl ParentPath {
    pub fn new(keys: Vec<PathKey>) -> Self {
        Self(keys)
    }

    pub fn keys(&self) -> &[PathKey] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Segments rendered as strings, as written to trace output.
    pub fn segments(&self) -> Vec<String> {
        self.0.iter().map(|k| k.to_string()).collect()
    }
}

impl fmt::Display for ParentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.segments().join(", "))
    }
}

impl<K: Into<PathKey>> FromIterator<K> for ParentPath {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

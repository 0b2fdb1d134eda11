use std::{fmt, path::Path};

use serde::de::DeserializeOwned;

use crate::form::{element_model::ElementNode, registry::ElementRegistry};

#[derive(Debug)]
pub enum LoadError {
    /// Fixture file could not be read
    Io { path: String, source: std::io::Error },

    /// `.json` fixture failed to parse
    JsonParse { path: String, source: serde_json::Error },

    /// YAML fixture failed to parse
    YamlParse { path: String, source: serde_yaml::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path, source)
            }
            LoadError::JsonParse { path, source } => {
                write!(f, "JSON parse error ({}): {}", path, source)
            }
            LoadError::YamlParse { path, source } => {
                write!(f, "YAML parse error ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::JsonParse { source, .. } => Some(source),
            LoadError::YamlParse { source, .. } => Some(source),
        }
    }
}

/// Read a fixture, parsing `.json` files as JSON and anything else as YAML.
pub fn load_file<T: DeserializeOwned>(path: &str) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;

    let is_json = Path::new(path)
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|source| LoadError::JsonParse {
            path: path.to_string(),
            source,
        })
    } else {
        serde_yaml::from_str(&content).map_err(|source| LoadError::YamlParse {
            path: path.to_string(),
            source,
        })
    }
}

pub fn load_tree(path: &str) -> Result<ElementNode, LoadError> {
    load_file(path)
}

pub fn load_values(path: &str) -> Result<serde_json::Value, LoadError> {
    load_file(path)
}

pub fn load_registry(path: &str) -> Result<ElementRegistry, LoadError> {
    load_file(path)
}

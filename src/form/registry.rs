use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    form::{
        element_model::{ElementHash, ElementNode},
        path::ParentPath,
    },
    values::error::BindError,
};

/// Identifier → declared path lookup consumed by the value tracker.
pub trait PathLookup {
    fn get(&self, hash: &ElementHash) -> Result<&ParentPath, BindError>;
}

/// In-memory registry of element paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementRegistry {
    paths: HashMap<ElementHash, ParentPath>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every node of the tree that has both a hash and a declared
    /// path. Nodes missing either are skipped.
    pub fn from_tree(root: &ElementNode) -> Self {
        let mut registry = Self::new();
        root.walk(&mut |node| {
            if let (Some(hash), Some(parents)) = (&node.hash, &node.parents) {
                registry.register(hash.clone(), parents.clone());
            }
        });
        registry
    }

    /// Returns the path previously registered for `hash`, if any.
    pub fn register(&mut self, hash: ElementHash, parents: ParentPath) -> Option<ParentPath> {
        self.paths.insert(hash, parents)
    }

    pub fn contains(&self, hash: &ElementHash) -> bool {
        self.paths.contains_key(hash)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl PathLookup for ElementRegistry {
    fn get(&self, hash: &ElementHash) -> Result<&ParentPath, BindError> {
        self.paths
            .get(hash)
            .ok_or_else(|| BindError::Lookup { hash: hash.clone() })
    }
}

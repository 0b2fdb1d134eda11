use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::path::ParentPath;

/// Opaque identifier the tree builder assigns to each element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementHash(pub String);

impl ElementHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementHash {
    fn from(s: &str) -> Self {
        ElementHash(s.to_string())
    }
}

impl From<String> for ElementHash {
    fn from(s: String) -> Self {
        ElementHash(s)
    }
}

/// Read access to an element tree.
///
/// The binder only ever needs an element's identifier and its children in
/// declared order, so any tree that can answer those two questions can be
/// bound to a submission.
pub trait ElementSource {
    fn hash(&self) -> Option<&ElementHash>;

    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

/// One node of an input definition tree, as loaded from a fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<ElementHash>,

    /// Declared location of this element's value in the submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<ParentPath>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_hash(mut self, hash: impl Into<ElementHash>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn with_parents(mut self, parents: ParentPath) -> Self {
        self.parents = Some(parents);
        self
    }

    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn child(&self, name: &str) -> Option<&ElementNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Visit this node and every descendant in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ElementNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut ElementNode)) {
        visit(self);
        for child in &mut self.children {
            child.walk_mut(visit);
        }
    }
}

impl ElementSource for ElementNode {
    fn hash(&self) -> Option<&ElementHash> {
        self.hash.as_ref()
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

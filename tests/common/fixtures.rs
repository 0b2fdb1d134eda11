#![allow(dead_code)]

use form_values::{ElementNode, ElementRegistry, ParentPath, PathKey};

/// Identified element whose value sits at `path`.
pub fn field(name: &str, hash: &str, path: &[&str]) -> ElementNode {
    ElementNode::new(name)
        .with_hash(hash)
        .with_parents(ParentPath::from_iter(path.iter().copied()))
}

/// Same as `field`, for paths mixing names and indexes.
pub fn field_at(name: &str, hash: &str, path: Vec<PathKey>) -> ElementNode {
    ElementNode::new(name)
        .with_hash(hash)
        .with_parents(ParentPath::new(path))
}

/// Unidentified container grouping `children`.
pub fn group(name: &str, children: Vec<ElementNode>) -> ElementNode {
    children
        .into_iter()
        .fold(ElementNode::new(name), |node, child| node.with_child(child))
}

pub fn registry_for(root: &ElementNode) -> ElementRegistry {
    ElementRegistry::from_tree(root)
}

pub fn fixture(name: &str) -> String {
    let base = std::env::current_dir().unwrap();
    base.join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}

/// Fresh path in the temp dir, removed first if it already exists.
pub fn temp_file(name: &str) -> String {
    let path = std::env::temp_dir().join(format!(
        "form-values-{}-{}",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_file(&path);
    path.display().to_string()
}

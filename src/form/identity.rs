use crate::form::{
    element_model::{ElementHash, ElementNode},
    path::ParentPath,
};

/// Give every node that declares a path but has no hash a derived one.
///
/// Returns how many hashes were assigned. Nodes that already carry a hash
/// keep it.
pub fn assign_hashes(root: &mut ElementNode) -> usize {
    let mut assigned = 0;

    root.walk_mut(&mut |node| {
        if node.hash.is_some() {
            return;
        }
        if let Some(parents) = &node.parents {
            let key = element_key(&node.name, parents);
            node.hash = Some(ElementHash(path_fingerprint(&key)));
            assigned += 1;
        }
    });

    assigned
}

/// Name and path rendered as a JSON array, so no segment content can be
/// mistaken for a separator.
pub fn element_key(name: &str, parents: &ParentPath) -> String {
    serde_json::to_string(&(name, parents))
        .unwrap_or_else(|_| format!("{:?}::{:?}", name, parents.keys()))
}

pub fn path_fingerprint(text: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

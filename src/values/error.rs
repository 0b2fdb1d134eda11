use std::fmt;

use crate::form::element_model::ElementHash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// An identified element has no declared path in the registry.
    ///
    /// The tree builder must register every identified element before the
    /// tree is bound, so this is never recovered from.
    Lookup { hash: ElementHash },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::Lookup { hash } => {
                write!(f, "No registered path for element '{}'", hash)
            }
        }
    }
}

impl std::error::Error for BindError {}

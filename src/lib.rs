//! Binds a tree of form elements to the loosely structured values a form
//! submission carries, producing one value per element keyed by the
//! element's hash.
//!
//! ```
//! use form_values::{ElementNode, ElementRegistry, ParentPath, ValueBinder};
//! use serde_json::json;
//!
//! let tree = ElementNode::new("form").with_child(
//!     ElementNode::new("title")
//!         .with_hash("title")
//!         .with_parents(ParentPath::from_iter(["title"])),
//! );
//! let registry = ElementRegistry::from_tree(&tree);
//! let submission = json!({ "title": "  Hello  " });
//!
//! let values = ValueBinder::bind(&tree, &submission, &registry).unwrap();
//! assert_eq!(values.get_value(&"title".into()), Some(json!("Hello")));
//! ```

pub mod cli;
pub mod form;
pub mod trace;
pub mod values;

pub use crate::{
    form::{
        element_model::{ElementHash, ElementNode, ElementSource},
        path::{ParentPath, PathKey},
        registry::{ElementRegistry, PathLookup},
    },
    values::{
        binder::{ResultMap, ValueBinder},
        error::BindError,
        submission::{Submission, SubmittedValues},
        tracker::ValueTracker,
    },
};

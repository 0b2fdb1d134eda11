use serde_json::Value;

use crate::{
    form::{element_model::ElementSource, path::ParentPath, registry::PathLookup},
    values::{
        error::BindError,
        nested::{is_composite, nested_value},
    },
};

/// Resolves single elements against a submission.
///
/// Holds nothing but shared borrows of the submission and the registry, so
/// copies handed to different branches of a tree are fully independent.
/// The view always starts at the root of the submission.
pub struct ValueTracker<'a, R: PathLookup + ?Sized> {
    values: &'a Value,
    registry: &'a R,
}

impl<'a, R: PathLookup + ?Sized> Clone for ValueTracker<'a, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R: PathLookup + ?Sized> Copy for ValueTracker<'a, R> {}

impl<'a, R: PathLookup + ?Sized> ValueTracker<'a, R> {
    pub fn new(values: &'a Value, registry: &'a R) -> Self {
        Self { values, registry }
    }

    pub fn values(&self) -> &'a Value {
        self.values
    }

    /// The submitted value of `element`, if it has one of its own.
    ///
    /// Elements without a hash resolve to `None` without consulting the
    /// registry. A hash the registry does not know is an error.
    pub fn resolve<E: ElementSource>(&self, element: &E) -> Result<Option<&'a Value>, BindError> {
        let Some(hash) = element.hash() else {
            return Ok(None);
        };

        let parents = self.registry.get(hash)?;
        Ok(self.resolve_path(parents))
    }

    /// Leaf value at `parents`, or `None` when missing or structured.
    pub fn resolve_path(&self, parents: &ParentPath) -> Option<&'a Value> {
        nested_value(self.values, parents).filter(|v| !is_composite(v))
    }
}

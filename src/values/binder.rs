use std::collections::HashMap;

use serde_json::Value;

use crate::{
    form::{
        element_model::{ElementHash, ElementSource},
        registry::PathLookup,
    },
    trace::{logger::TraceLogger, trace::BindEvent},
    values::{
        error::BindError, normalize::normalize, submission::Submission, tracker::ValueTracker,
    },
};

/// Element hash → submitted value. `None` marks an element that was visited
/// but had no value of its own.
pub type ResultMap = HashMap<ElementHash, Option<Value>>;

/// Submitted values of a whole element tree, keyed by element hash.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueBinder {
    values: ResultMap,
}

impl ValueBinder {
    /// Whether `submission` carries anything worth binding.
    pub fn exists<S: Submission + ?Sized>(submission: &S) -> bool {
        submission.exists()
    }

    /// Bind every identified element under `root` to its submitted value.
    ///
    /// Nothing is resolved when nothing was submitted. Fails on the first
    /// identified element the registry does not know.
    pub fn bind<E, S, R>(root: &E, submission: &S, registry: &R) -> Result<Self, BindError>
    where
        E: ElementSource,
        S: Submission + ?Sized,
        R: PathLookup + ?Sized,
    {
        Self::bind_traced(root, submission, registry, &TraceLogger::disabled())
    }

    /// Same as [`ValueBinder::bind`], logging one event per identified element.
    pub fn bind_traced<E, S, R>(
        root: &E,
        submission: &S,
        registry: &R,
        tracer: &TraceLogger,
    ) -> Result<Self, BindError>
    where
        E: ElementSource,
        S: Submission + ?Sized,
        R: PathLookup + ?Sized,
    {
        let mut walk = Walk {
            registry,
            tracer,
            values: ResultMap::new(),
            step: 0,
        };

        if Self::exists(submission) {
            let tracker = ValueTracker::new(submission.values(), registry);
            let walked = walk.visit(root, tracker);
            tracer.flush();
            walked?;
        }

        Ok(Self {
            values: walk.values,
        })
    }

    /// True when the element was bound to a present, non-null value.
    pub fn has_value(&self, hash: &ElementHash) -> bool {
        matches!(self.values.get(hash), Some(Some(v)) if !v.is_null())
    }

    /// Trimmed value of the element, `None` when it has none.
    pub fn get_value(&self, hash: &ElementHash) -> Option<Value> {
        match self.values.get(hash) {
            Some(Some(v)) if !v.is_null() => Some(normalize(v)),
            _ => None,
        }
    }

    /// Every visited element with its value exactly as submitted.
    pub fn all_values(&self) -> &ResultMap {
        &self.values
    }

    /// Every element that has a value, trimmed the way [`ValueBinder::get_value`] trims.
    pub fn normalized_values(&self) -> HashMap<ElementHash, Value> {
        self.values
            .iter()
            .filter_map(|(hash, value)| match value {
                Some(v) if !v.is_null() => Some((hash.clone(), normalize(v))),
                _ => None,
            })
            .collect()
    }

    /// Whether the element was visited, with or without a value.
    pub fn is_bound(&self, hash: &ElementHash) -> bool {
        self.values.contains_key(hash)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> ResultMap {
        self.values
    }
}

struct Walk<'t, R: PathLookup + ?Sized> {
    registry: &'t R,
    tracer: &'t TraceLogger,
    values: ResultMap,
    step: u64,
}

impl<'t, R: PathLookup + ?Sized> Walk<'t, R> {
    fn visit<E: ElementSource>(
        &mut self,
        element: &E,
        tracker: ValueTracker<'_, R>,
    ) -> Result<(), BindError> {
        let value = tracker.resolve(element)?;

        if let Some(hash) = element.hash() {
            self.record(hash, value);
        }

        // Each child descends with its own copy of the tracker.
        for child in element.children() {
            self.visit(child, tracker)?;
        }

        Ok(())
    }

    fn record(&mut self, hash: &ElementHash, value: Option<&Value>) {
        if self.tracer.is_enabled() {
            let mut event = BindEvent::now(self.step, hash).with_value(value);
            if let Ok(parents) = self.registry.get(hash) {
                event = event.with_parents(parents);
            }
            self.tracer.log(&event);
        }

        self.step += 1;
        self.values.insert(hash.clone(), value.cloned());
    }
}

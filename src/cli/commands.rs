use std::collections::BTreeMap;

use serde_json::Value;

use crate::cli::config::{BindSettings, NormalizeMode};
use crate::cli::loader::{load_registry, load_tree, load_values};
use crate::form::identity::assign_hashes;
use crate::form::registry::ElementRegistry;
use crate::trace::logger::TraceLogger;
use crate::values::binder::ValueBinder;

// ============================================================================
// bind subcommand
// ============================================================================

pub fn cmd_bind(
    tree_path: &str,
    values_path: &str,
    registry_path: Option<&str>,
    settings: &BindSettings,
    output: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = load_tree(tree_path)?;
    let values = load_values(values_path)?;

    let assigned = assign_hashes(&mut tree);
    if verbose > 1 && assigned > 0 {
        eprintln!("Derived {} element hashes from declared paths", assigned);
    }

    let registry = match registry_path {
        Some(path) => load_registry(path)?,
        None => ElementRegistry::from_tree(&tree),
    };

    if verbose > 0 {
        eprintln!(
            "Binding {} against {} ({} registered paths)...",
            tree_path,
            values_path,
            registry.len()
        );
    }

    let tracer = match &settings.trace {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    let binder = ValueBinder::bind_traced(&tree, &values, &registry, &tracer)?;

    if verbose > 0 && binder.is_empty() {
        eprintln!("No values submitted");
    }

    let rendered = serde_json::to_string_pretty(&render_values(&binder, settings.normalize))?;

    match output {
        Some(path) => std::fs::write(path, format!("{}\n", rendered))?,
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Result map in printable form, sorted by hash. Elements without a value
/// print as `null`.
pub fn render_values(binder: &ValueBinder, mode: NormalizeMode) -> BTreeMap<String, Value> {
    match mode {
        NormalizeMode::PerKey => binder
            .all_values()
            .iter()
            .map(|(hash, value)| (hash.to_string(), value.clone().unwrap_or(Value::Null)))
            .collect(),
        NormalizeMode::Always => {
            let normalized = binder.normalized_values();
            binder
                .all_values()
                .keys()
                .map(|hash| {
                    let value = normalized.get(hash).cloned().unwrap_or(Value::Null);
                    (hash.to_string(), value)
                })
                .collect()
        }
    }
}

// ============================================================================
// exists subcommand
// ============================================================================

/// Report whether the submission has values; returns the answer.
pub fn cmd_exists(values_path: &str, verbose: u8) -> Result<bool, Box<dyn std::error::Error>> {
    let values = load_values(values_path)?;
    let exists = ValueBinder::exists(&values);

    if verbose > 0 {
        eprintln!("Checked {}", values_path);
    }
    println!("{}", exists);

    Ok(exists)
}

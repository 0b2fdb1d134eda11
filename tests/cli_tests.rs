use clap::Parser;
use form_values::cli::commands::{cmd_bind, cmd_exists, render_values};
use form_values::cli::config::{
    AppConfig, BindSettings, Cli, Commands, NormalizeMode, load_config, resolve_bind_settings,
};
use form_values::cli::loader::{LoadError, load_tree, load_values};
use form_values::form::identity::assign_hashes;
use form_values::{ElementHash, ElementRegistry, ValueBinder};
use serde_json::{Value, json};

use crate::common::fixtures::{fixture, temp_file};

mod common;

fn settings(normalize: NormalizeMode) -> BindSettings {
    BindSettings {
        normalize,
        trace: None,
    }
}

fn read_json(path: &str) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_bind_minimal() {
    let cli = Cli::parse_from([
        "form-values",
        "bind",
        "--tree",
        "tree.yaml",
        "--values",
        "values.json",
    ]);
    match cli.command {
        Commands::Bind {
            tree,
            values,
            registry,
            normalize,
            trace,
            output,
        } => {
            assert_eq!(tree, "tree.yaml");
            assert_eq!(values, "values.json");
            assert_eq!(registry, None);
            assert_eq!(normalize, None);
            assert_eq!(trace, None);
            assert_eq!(output, None);
        }
        _ => panic!("Expected Bind command"),
    }
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_parse_bind_all_args() {
    let cli = Cli::parse_from([
        "form-values",
        "-vv",
        "bind",
        "--tree",
        "t.yaml",
        "--values",
        "v.json",
        "--registry",
        "r.yaml",
        "--normalize",
        "always",
        "--trace",
        "bind.jsonl",
        "-o",
        "out.json",
        "--config",
        "custom.yaml",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
    match cli.command {
        Commands::Bind {
            registry,
            normalize,
            trace,
            output,
            ..
        } => {
            assert_eq!(registry.as_deref(), Some("r.yaml"));
            assert_eq!(normalize, Some(NormalizeMode::Always));
            assert_eq!(trace.as_deref(), Some("bind.jsonl"));
            assert_eq!(output.as_deref(), Some("out.json"));
        }
        _ => panic!("Expected Bind command"),
    }
}

#[test]
fn cli_parse_exists() {
    let cli = Cli::parse_from(["form-values", "exists", "--values", "v.json"]);
    match cli.command {
        Commands::Exists { values } => assert_eq!(values, "v.json"),
        _ => panic!("Expected Exists command"),
    }
}

#[test]
fn cli_rejects_unknown_normalize_mode() {
    let result = Cli::try_parse_from([
        "form-values",
        "bind",
        "--tree",
        "t",
        "--values",
        "v",
        "--normalize",
        "sometimes",
    ]);
    assert!(result.is_err());
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_defaults_when_file_missing() {
    let config = load_config(Some("/nonexistent/form-values.yaml"));
    assert_eq!(config.bind.normalize, NormalizeMode::PerKey);
    assert_eq!(config.bind.trace, None);
}

#[test]
fn config_loads_from_yaml() {
    let config = load_config(Some(&fixture("always_normalize.yaml")));
    assert_eq!(config.bind.normalize, NormalizeMode::Always);
}

#[test]
fn config_partial_yaml_fills_defaults() {
    let config: AppConfig = serde_yaml::from_str("bind:\n  trace: out.jsonl\n").unwrap();
    assert_eq!(config.bind.normalize, NormalizeMode::PerKey);
    assert_eq!(config.bind.trace.as_deref(), Some("out.jsonl"));

    let empty: AppConfig = serde_yaml::from_str("{}").unwrap();
    assert_eq!(empty.bind.normalize, NormalizeMode::PerKey);
}

#[test]
fn cli_flags_override_config() {
    let mut config = AppConfig::default();
    config.bind.normalize = NormalizeMode::Always;
    config.bind.trace = Some("from-config.jsonl".into());

    let from_config = resolve_bind_settings(&config, None, None);
    assert_eq!(from_config.normalize, NormalizeMode::Always);
    assert_eq!(from_config.trace.as_deref(), Some("from-config.jsonl"));

    let overridden = resolve_bind_settings(&config, Some(NormalizeMode::PerKey), Some("cli.jsonl"));
    assert_eq!(overridden.normalize, NormalizeMode::PerKey);
    assert_eq!(overridden.trace.as_deref(), Some("cli.jsonl"));
}

// ============================================================================
// Loader Tests
// ============================================================================

#[test]
fn loader_reports_missing_and_malformed_files() {
    match load_values("/nonexistent/values.json") {
        Err(LoadError::Io { path, .. }) => assert_eq!(path, "/nonexistent/values.json"),
        other => panic!("Expected Io error, got {:?}", other),
    }

    let bad_json = temp_file("bad.json");
    std::fs::write(&bad_json, "{ not json").unwrap();
    assert!(matches!(load_values(&bad_json), Err(LoadError::JsonParse { .. })));

    let bad_yaml = temp_file("bad.yaml");
    std::fs::write(&bad_yaml, "children: [unclosed").unwrap();
    assert!(matches!(load_tree(&bad_yaml), Err(LoadError::YamlParse { .. })));

    let _ = std::fs::remove_file(&bad_json);
    let _ = std::fs::remove_file(&bad_yaml);
}

// ============================================================================
// bind / exists subcommands
// ============================================================================

#[test]
fn bind_prints_raw_values_per_key() {
    let out = temp_file("bind_raw.json");
    cmd_bind(
        &fixture("contact_tree.yaml"),
        &fixture("contact_values.json"),
        None,
        &settings(NormalizeMode::PerKey),
        Some(&out),
        0,
    )
    .unwrap();

    let result = read_json(&out);
    assert_eq!(result["h-name"], "  Ada Lovelace ");
    assert_eq!(result["h-address"], Value::Null, "Composite has no value");
    assert_eq!(result["h-street"], " 12 Analytical Way");
    assert_eq!(result["h-topics"], json!([" maths ", 7, "engines "]));
    assert_eq!(result["h-newsletter"], Value::Null);
    // Two derived phone hashes plus six declared ones
    assert_eq!(result.as_object().unwrap().len(), 8);

    let _ = std::fs::remove_file(&out);
}

#[test]
fn bind_always_mode_trims_everything() {
    let out = temp_file("bind_trimmed.json");
    cmd_bind(
        &fixture("contact_tree.yaml"),
        &fixture("contact_values.json"),
        None,
        &settings(NormalizeMode::Always),
        Some(&out),
        0,
    )
    .unwrap();

    let result = read_json(&out);
    assert_eq!(result["h-name"], "Ada Lovelace");
    assert_eq!(result["h-city"], "London");
    assert_eq!(result["h-topics"], json!(["maths", 7, "engines"]));
    assert_eq!(result["h-newsletter"], Value::Null);

    let trimmed_phones: Vec<&Value> = result
        .as_object()
        .unwrap()
        .values()
        .filter(|v| **v == "555-0100")
        .collect();
    assert_eq!(trimmed_phones.len(), 1, "Only the primary phone was submitted");

    let _ = std::fs::remove_file(&out);
}

#[test]
fn bind_with_explicit_registry_uses_its_paths() {
    let out = temp_file("bind_registry.json");
    let values = temp_file("registry_values.json");
    std::fs::write(&values, r#"{ "name": "from registry", "declared": { "elsewhere": "tree" } }"#)
        .unwrap();

    cmd_bind(
        &fixture("name_tree.yaml"),
        &values,
        Some(&fixture("partial_registry.yaml")),
        &settings(NormalizeMode::PerKey),
        Some(&out),
        0,
    )
    .unwrap();

    assert_eq!(read_json(&out), json!({ "h-name": "from registry" }));

    let _ = std::fs::remove_file(&out);
    let _ = std::fs::remove_file(&values);
}

#[test]
fn bind_fails_when_registry_misses_an_element() {
    // Registry lacks the derived phone hashes
    let err = cmd_bind(
        &fixture("contact_tree.yaml"),
        &fixture("contact_values.json"),
        Some(&fixture("contact_registry.yaml")),
        &settings(NormalizeMode::PerKey),
        Some(&temp_file("never_written.json")),
        0,
    )
    .unwrap_err();

    assert!(err.to_string().contains("No registered path"), "got: {}", err);
}

#[test]
fn bind_blank_submission_prints_empty_map() {
    let out = temp_file("bind_blank.json");
    cmd_bind(
        &fixture("contact_tree.yaml"),
        &fixture("blank_values.json"),
        Some(&fixture("partial_registry.yaml")),
        &settings(NormalizeMode::PerKey),
        Some(&out),
        0,
    )
    .unwrap();

    assert_eq!(read_json(&out), json!({}));
    let _ = std::fs::remove_file(&out);
}

#[test]
fn exists_reports_submission_state() {
    assert!(cmd_exists(&fixture("contact_values.json"), 0).unwrap());
    assert!(!cmd_exists(&fixture("blank_values.json"), 0).unwrap());
}

#[test]
fn render_values_sorts_and_nulls_absent() {
    let mut tree = load_tree(&fixture("contact_tree.yaml")).unwrap();
    assign_hashes(&mut tree);
    let registry = ElementRegistry::from_tree(&tree);
    let values = load_values(&fixture("contact_values.json")).unwrap();
    let binder = ValueBinder::bind(&tree, &values, &registry).unwrap();

    let rendered = render_values(&binder, NormalizeMode::PerKey);
    let keys: Vec<&String> = rendered.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    assert!(binder.is_bound(&ElementHash::from("h-newsletter")));
    assert_eq!(rendered.get("h-newsletter"), Some(&Value::Null));
}

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-values",
    version,
    about = "Bind submitted form values to an element tree"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: form-values.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bind a submission to an element tree and print the values per element
    Bind {
        /// Element tree (YAML or JSON)
        #[arg(long)]
        tree: String,

        /// Submitted values (JSON or YAML)
        #[arg(long)]
        values: String,

        /// Hash → path registry (default: derived from the tree)
        #[arg(long)]
        registry: Option<String>,

        /// Which values to print: per-key (raw) or always (trimmed)
        #[arg(long, value_enum)]
        normalize: Option<NormalizeMode>,

        /// Append one JSON line per bound element to this file
        #[arg(long)]
        trace: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Report whether a submission carries any values
    Exists {
        /// Submitted values (JSON or YAML)
        #[arg(long)]
        values: String,
    },
}

/// When trimming is applied to printed values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizeMode {
    /// Only single-element reads trim; the bulk map is printed raw.
    #[default]
    PerKey,
    /// The bulk map is trimmed like single-element reads.
    Always,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-values.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub bind: BindConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BindConfig {
    #[serde(default)]
    pub normalize: NormalizeMode,

    pub trace: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("form-values.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Settings for one bind run, CLI flags taking precedence over the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindSettings {
    pub normalize: NormalizeMode,
    pub trace: Option<String>,
}

pub fn resolve_bind_settings(
    config: &AppConfig,
    normalize: Option<NormalizeMode>,
    trace: Option<&str>,
) -> BindSettings {
    BindSettings {
        normalize: normalize.unwrap_or(config.bind.normalize),
        trace: trace
            .map(str::to_string)
            .or_else(|| config.bind.trace.clone()),
    }
}

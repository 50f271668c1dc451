//! Layered configuration for the calculator binary.
//!
//! Sources, lowest to highest priority:
//! 1) defaults -> 2) YAML (if provided) -> 3) env (`CALCULATOR__*`) -> 4) CLI overrides

use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables read into the configuration.
///
/// Nested keys are separated by `__`, e.g. `CALCULATOR__OUTPUT__FORMAT=json`.
pub const ENV_PREFIX: &str = "CALCULATOR__";

/// Root configuration of the calculator binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    /// Default: `"warn"`
    pub level: String,

    /// Emit JSON log lines instead of plain text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            json: false,
        }
    }
}

/// Result output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Digits after the decimal point for floating-point results.
    /// Unset prints the shortest exact representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare value, e.g. `2.5`.
    #[default]
    Text,
    /// The full evaluation as a JSON object.
    Json,
}

/// Values taken from command-line flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub json: bool,
    pub precision: Option<usize>,
}

impl AppConfig {
    /// Load configuration from defaults, an optional YAML file and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not point to a file, or if any source
    /// holds a value of the wrong type or an unknown key.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_cli_overrides(&mut self, overrides: &CliOverrides) {
        if overrides.json {
            self.output.format = OutputFormat::Json;
        }
        if let Some(precision) = overrides.precision {
            self.output.precision = Some(precision);
        }
    }

    /// Serialize the effective configuration as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}

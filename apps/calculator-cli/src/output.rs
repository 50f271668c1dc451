//! Rendering of evaluations for stdout.

use anyhow::{Context, Result};
use calculator_sdk::Evaluation;

use crate::config::{OutputConfig, OutputFormat};

/// Render an evaluation according to the output configuration.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(evaluation: &Evaluation, cfg: &OutputConfig) -> Result<String> {
    match cfg.format {
        OutputFormat::Text => Ok(match cfg.precision {
            Some(precision) => format!("{:.precision$}", evaluation.value),
            None => evaluation.value.to_string(),
        }),
        OutputFormat::Json => {
            serde_json::to_string(evaluation).context("failed to serialize evaluation")
        }
    }
}

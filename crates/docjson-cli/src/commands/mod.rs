//! Subcommand implementations.

pub mod check;
pub mod generate;
pub mod init;

use anyhow::{anyhow, Context, Result};
use docjson::{load_model_from_json, Model};
use std::path::Path;

/// Reads and validates a model file.
///
/// Validation errors are rendered as diagnostics, with their code and help.
pub fn load_model(path: &Path) -> Result<Model> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read model: {}", path.display()))?;

    let model = load_model_from_json(&content).map_err(|e| {
        let report = miette::Report::new(e);
        anyhow!("Invalid model {}:\n{report:?}", path.display())
    })?;

    tracing::debug!("Loaded {} types from {}", model.len(), path.display());
    Ok(model)
}

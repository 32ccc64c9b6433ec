//! Declaration models handed over by a host as JSON.
//!
//! # Pipeline
//!
//! ```text
//! JSON text
//!   ↓ serde (DTO layer)
//! dto types
//!   ↓ validate + convert (doc text parsed into block tags)
//! Model (pure domain model)
//! ```

pub mod dto;
pub mod loader;

use crate::model::Model;

/// Errors from parsing JSON and loading a model.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum LoadModelError {
    /// JSON deserialization failed.
    #[error("JSON parse error: {0}")]
    #[diagnostic(code(docjson::load::json))]
    Json(#[from] serde_json::Error),

    /// Domain model validation failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] loader::LoadError),
}

/// Parses JSON content into a validated [`Model`].
///
/// # Errors
///
/// Returns an error if JSON parsing or model validation fails.
pub fn load_model_from_json(content: &str) -> Result<Model, LoadModelError> {
    let dto: dto::ModelDto = serde_json::from_str(content)?;
    Ok(loader::load(dto)?)
}

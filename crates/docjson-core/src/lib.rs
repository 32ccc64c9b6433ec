//! # docjson-core
//!
//! Core of docjson: serializes an already-parsed model of source
//! declarations and their documentation comments to JSON.
//!
//! This crate provides:
//!
//! - [`Model`] and friends, the read-only declaration model
//! - [`DocComment`] / [`BlockTag`], documentation classified at parse time
//! - [`TagMatcher`], association of `@param` / `@throws` tags with parameters
//!   and thrown types
//! - [`StructuredWriter`] / [`JsonWriter`], push-style output
//! - [`serialize`], the single entry point of a run
//! - [`input`], loading a model handed over as JSON
//!
//! ## Example
//!
//! ```
//! use docjson_core::{serialize, JsonWriter, Model, TypeDeclaration};
//!
//! let model = Model::new(vec![TypeDeclaration::new("com.example.Empty")]);
//! let mut writer = JsonWriter::compact(Vec::new());
//! serialize(&model, &mut writer)?;
//! let json = String::from_utf8(writer.finish()?).unwrap();
//! assert!(json.starts_with(r#"{"classes":[{"name":"com.example.Empty""#));
//! # Ok::<(), docjson_core::WriteError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod docs;
mod matcher;
mod model;
mod serializer;
mod types;
mod writer;

/// Loading declaration models from JSON.
pub mod input;

pub use config::{Config, ConfigError, OutputConfig};
pub use docs::{parse as parse_doc_comment, BlockTag, DocComment, TagKind};
pub use input::{load_model_from_json, loader::LoadError, LoadModelError};
pub use matcher::{first_of_kind, match_param, match_throws, TagMatcher};
pub use model::{
    Callable, CallableKind, Field, Model, Modifier, ModifierSet, Parameter, TypeDeclaration,
    Visibility,
};
pub use serializer::serialize;
pub use types::{PrimitiveKind, TypeRef};
pub use writer::{JsonWriter, StructuredWriter, WriteError};

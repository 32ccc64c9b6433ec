//! # docjson
//!
//! Serializes an already-parsed model of source declarations and their
//! documentation comments into a single JSON document.
//!
//! This is the facade crate: it re-exports the core model and serializer
//! and adds output options and sinks.
//!
//! ## Quick Start
//!
//! ```
//! use docjson::{load_model_from_json, to_vec, Options};
//!
//! let model = load_model_from_json(r#"{ "types": [ { "name": "com.example.Empty" } ] }"#)?;
//! let json = to_vec(&model, &Options::default())?;
//! assert_eq!(
//!     String::from_utf8(json).unwrap(),
//!     r#"{"classes":[{"name":"com.example.Empty","interfaces":[],"superclass":"","constructors":[],"fields":[],"methods":[]}]}"#
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Writing to a file
//!
//! ```rust,ignore
//! use docjson::{write_model, Options, OutputSink};
//!
//! let options = Options::default().pretty(true).append(true);
//! let sink = OutputSink::file("build/api.json", &options);
//! write_model(&model, &options, &sink)?;
//! ```

#![forbid(unsafe_code)]

pub use docjson_core::*;

mod options;
mod sink;

pub use options::Options;
pub use sink::{write_model, OpenMode, OutputSink, SinkError};

use std::io;
use tracing::debug;

/// Serializes `model` into `out` and hands the writer back.
///
/// The writer is flushed but not closed; closing stays with the caller.
///
/// # Errors
///
/// Returns the first write error; `out` then holds a partial document.
pub fn to_writer<W: io::Write>(model: &Model, options: &Options, out: W) -> Result<W, WriteError> {
    debug!("Writing JSON (pretty: {})", options.pretty);
    if options.pretty {
        let mut writer = JsonWriter::pretty(out);
        serialize(model, &mut writer)?;
        writer.finish()
    } else {
        let mut writer = JsonWriter::compact(out);
        serialize(model, &mut writer)?;
        writer.finish()
    }
}

/// Serializes `model` into a fresh byte buffer.
///
/// # Errors
///
/// Only fails if the serializer produces an unbalanced document, which
/// would be a bug.
pub fn to_vec(model: &Model, options: &Options) -> Result<Vec<u8>, WriteError> {
    to_writer(model, options, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_and_pretty_differ_only_in_whitespace() {
        let model = Model::new(vec![TypeDeclaration::new("a.B").with_interface(TypeRef::declared("a.C"))]);
        let compact = to_vec(&model, &Options::default()).unwrap();
        let pretty = to_vec(&model, &Options::default().pretty(true)).unwrap();

        assert_ne!(compact, pretty);
        let strip = |bytes: &[u8]| -> Vec<u8> {
            bytes.iter().copied().filter(|b| !b.is_ascii_whitespace()).collect()
        };
        assert_eq!(strip(&compact), strip(&pretty));
    }

    #[test]
    fn to_writer_returns_the_writer() {
        let out = to_writer(&Model::default(), &Options::default(), Vec::new()).unwrap();
        assert_eq!(out, br#"{"classes":[]}"#);
    }
}

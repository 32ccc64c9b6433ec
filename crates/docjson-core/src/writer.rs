//! Push-style structured output.
//!
//! [`StructuredWriter`] is the seam between the serializer and the output
//! format. [`JsonWriter`] streams JSON through a `serde_json` formatter, so
//! compact and pretty output share one code path.

use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use std::io;
use thiserror::Error;

/// Errors raised while writing structured output.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The underlying sink rejected a write.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// Open/close calls were not well nested.
    #[error("malformed document structure: {0}")]
    Nesting(&'static str),
}

/// A push API for nested objects and arrays.
///
/// Calls must be well nested: every `begin_*` is closed by the matching
/// `end_*`, and inside an object every value is preceded by [`key`].
///
/// [`key`]: StructuredWriter::key
pub trait StructuredWriter {
    /// Opens an object.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails or the call is misplaced.
    fn begin_object(&mut self) -> Result<(), WriteError>;

    /// Closes the innermost object.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails or no object is open.
    fn end_object(&mut self) -> Result<(), WriteError>;

    /// Opens an array.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails or the call is misplaced.
    fn begin_array(&mut self) -> Result<(), WriteError>;

    /// Closes the innermost array.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails or no array is open.
    fn end_array(&mut self) -> Result<(), WriteError>;

    /// Writes an object key; the next value belongs to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails or no object is open.
    fn key(&mut self, name: &str) -> Result<(), WriteError>;

    /// Writes a string value.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails or the call is misplaced.
    fn string(&mut self, value: &str) -> Result<(), WriteError>;

    /// Writes a boolean value.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails or the call is misplaced.
    fn bool(&mut self, value: bool) -> Result<(), WriteError>;

    /// Writes `"name": "value"`.
    ///
    /// # Errors
    ///
    /// See [`StructuredWriter::string`].
    fn string_field(&mut self, name: &str, value: &str) -> Result<(), WriteError> {
        self.key(name)?;
        self.string(value)
    }

    /// Writes `"name": value` for a boolean.
    ///
    /// # Errors
    ///
    /// See [`StructuredWriter::bool`].
    fn bool_field(&mut self, name: &str, value: bool) -> Result<(), WriteError> {
        self.key(name)?;
        self.bool(value)
    }

    /// Writes `"name": "value"` only if `value` is present.
    ///
    /// This is the one place optional fields are decided; absent values are
    /// omitted, never written as `null`.
    ///
    /// # Errors
    ///
    /// See [`StructuredWriter::string`].
    fn opt_string_field(&mut self, name: &str, value: Option<&str>) -> Result<(), WriteError> {
        match value {
            Some(value) => self.string_field(name, value),
            None => Ok(()),
        }
    }

    /// Writes `"name": [ "a", "b", ... ]`.
    ///
    /// # Errors
    ///
    /// See [`StructuredWriter::string`].
    fn string_array_field(&mut self, name: &str, values: &[&str]) -> Result<(), WriteError> {
        self.begin_array_field(name)?;
        for value in values {
            self.string(value)?;
        }
        self.end_array()
    }

    /// Writes `"name": [` and leaves the array open.
    ///
    /// # Errors
    ///
    /// See [`StructuredWriter::begin_array`].
    fn begin_array_field(&mut self, name: &str) -> Result<(), WriteError> {
        self.key(name)?;
        self.begin_array()
    }

    /// Writes `"name": {` and leaves the object open.
    ///
    /// # Errors
    ///
    /// See [`StructuredWriter::begin_object`].
    fn begin_object_field(&mut self, name: &str) -> Result<(), WriteError> {
        self.key(name)?;
        self.begin_object()
    }
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Object { first: bool, key_pending: bool },
    Array { first: bool },
}

/// Streaming JSON implementation of [`StructuredWriter`].
///
/// ```
/// use docjson_core::{JsonWriter, StructuredWriter};
///
/// let mut w = JsonWriter::compact(Vec::new());
/// w.begin_object()?;
/// w.string_field("name", "Foo")?;
/// w.end_object()?;
/// assert_eq!(w.finish()?, br#"{"name":"Foo"}"#);
/// # Ok::<(), docjson_core::WriteError>(())
/// ```
pub struct JsonWriter<W, F = CompactFormatter> {
    out: W,
    formatter: F,
    stack: Vec<Frame>,
    root_written: bool,
}

impl<W: io::Write> JsonWriter<W> {
    /// Creates a writer producing compact JSON.
    #[must_use]
    pub fn compact(out: W) -> Self {
        Self::with_formatter(out, CompactFormatter)
    }
}

impl<W: io::Write> JsonWriter<W, PrettyFormatter<'static>> {
    /// Creates a writer producing indented JSON (two spaces per level).
    #[must_use]
    pub fn pretty(out: W) -> Self {
        Self::with_formatter(out, PrettyFormatter::new())
    }
}

impl<W: io::Write, F: Formatter> JsonWriter<W, F> {
    /// Creates a writer with a custom `serde_json` formatter.
    #[must_use]
    pub fn with_formatter(out: W, formatter: F) -> Self {
        Self {
            out,
            formatter,
            stack: Vec::new(),
            root_written: false,
        }
    }

    /// Returns the current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Checks that every container is closed, flushes, and returns the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if containers remain open or the flush fails.
    pub fn finish(mut self) -> Result<W, WriteError> {
        if !self.stack.is_empty() {
            return Err(WriteError::Nesting("document has unclosed containers"));
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn before_value(&mut self) -> Result<(), WriteError> {
        match self.stack.last_mut() {
            None => {
                if self.root_written {
                    return Err(WriteError::Nesting("more than one root value"));
                }
                self.root_written = true;
            }
            Some(Frame::Array { first }) => {
                self.formatter.begin_array_value(&mut self.out, *first)?;
                *first = false;
            }
            Some(Frame::Object { key_pending, .. }) => {
                if !*key_pending {
                    return Err(WriteError::Nesting("object value written without a key"));
                }
                *key_pending = false;
            }
        }
        Ok(())
    }

    fn after_value(&mut self) -> Result<(), WriteError> {
        match self.stack.last() {
            None => {}
            Some(Frame::Array { .. }) => self.formatter.end_array_value(&mut self.out)?,
            Some(Frame::Object { .. }) => self.formatter.end_object_value(&mut self.out)?,
        }
        Ok(())
    }

    fn write_str(&mut self, value: &str) -> Result<(), WriteError> {
        serde_json::to_writer(&mut self.out, value).map_err(io::Error::from)?;
        Ok(())
    }
}

impl<W: io::Write, F: Formatter> StructuredWriter for JsonWriter<W, F> {
    fn begin_object(&mut self) -> Result<(), WriteError> {
        self.before_value()?;
        self.formatter.begin_object(&mut self.out)?;
        self.stack.push(Frame::Object {
            first: true,
            key_pending: false,
        });
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), WriteError> {
        match self.stack.pop() {
            Some(Frame::Object {
                key_pending: false, ..
            }) => {}
            Some(Frame::Object { .. }) => {
                return Err(WriteError::Nesting("object closed while a key awaits its value"));
            }
            _ => return Err(WriteError::Nesting("end_object without an open object")),
        }
        self.formatter.end_object(&mut self.out)?;
        self.after_value()
    }

    fn begin_array(&mut self) -> Result<(), WriteError> {
        self.before_value()?;
        self.formatter.begin_array(&mut self.out)?;
        self.stack.push(Frame::Array { first: true });
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), WriteError> {
        match self.stack.pop() {
            Some(Frame::Array { .. }) => {}
            _ => return Err(WriteError::Nesting("end_array without an open array")),
        }
        self.formatter.end_array(&mut self.out)?;
        self.after_value()
    }

    fn key(&mut self, name: &str) -> Result<(), WriteError> {
        let Some(Frame::Object { first, key_pending }) = self.stack.last_mut() else {
            return Err(WriteError::Nesting("key written outside of an object"));
        };
        if *key_pending {
            return Err(WriteError::Nesting("key written while another awaits its value"));
        }
        self.formatter.begin_object_key(&mut self.out, *first)?;
        *first = false;
        *key_pending = true;
        self.write_str(name)?;
        self.formatter.end_object_key(&mut self.out)?;
        self.formatter.begin_object_value(&mut self.out)?;
        Ok(())
    }

    fn string(&mut self, value: &str) -> Result<(), WriteError> {
        self.before_value()?;
        self.write_str(value)?;
        self.after_value()
    }

    fn bool(&mut self, value: bool) -> Result<(), WriteError> {
        self.before_value()?;
        self.formatter.write_bool(&mut self.out, value)?;
        self.after_value()
    }
}

//! Output destinations for a serialized document.

use crate::options::Options;
use crate::to_writer;
use docjson_core::{Model, WriteError};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;

/// How an output file is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenMode {
    /// Replace existing content.
    #[default]
    Truncate,
    /// Keep existing content and write after it.
    Append,
}

/// Where the document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    /// Standard output.
    Stdout,
    /// A file, created if missing.
    File {
        /// Target path.
        path: PathBuf,
        /// Open mode.
        mode: OpenMode,
    },
}

impl OutputSink {
    /// A file sink whose open mode follows `options.append`.
    pub fn file(path: impl Into<PathBuf>, options: &Options) -> Self {
        let mode = if options.append {
            OpenMode::Append
        } else {
            OpenMode::Truncate
        };
        Self::File {
            path: path.into(),
            mode,
        }
    }

    /// A file sink when `path` is set, stdout otherwise.
    pub fn from_path(path: Option<&Path>, options: &Options) -> Self {
        path.map_or(Self::Stdout, |p| Self::file(p, options))
    }
}

/// Errors from writing a document to a sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The output file could not be opened.
    #[error("Failed to open {path}: {source}")]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },

    /// Writing the document failed.
    #[error("Failed to write JSON: {0}")]
    Write(#[from] WriteError),
}

/// Serializes `model` to `sink`.
///
/// The file handle is opened here and dropped on return, so a failed run
/// leaves whatever was written so far in place.
///
/// # Errors
///
/// Returns [`SinkError::Open`] if the file cannot be opened and
/// [`SinkError::Write`] on any write failure.
pub fn write_model(model: &Model, options: &Options, sink: &OutputSink) -> Result<(), SinkError> {
    match sink {
        OutputSink::Stdout => {
            let stdout = io::stdout();
            to_writer(model, options, BufWriter::new(stdout.lock()))?;
        }
        OutputSink::File { path, mode } => {
            let file = open(path, *mode).map_err(|e| SinkError::Open {
                path: path.clone(),
                source: e,
            })?;
            to_writer(model, options, BufWriter::new(file))?;
            info!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn open(path: &Path, mode: OpenMode) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        OpenMode::Truncate => options.write(true).truncate(true),
        OpenMode::Append => options.append(true),
    };
    options.open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sink_mode_follows_options() {
        let sink = OutputSink::file("a.json", &Options::default().append(true));
        assert_eq!(
            sink,
            OutputSink::File {
                path: PathBuf::from("a.json"),
                mode: OpenMode::Append
            }
        );
    }

    #[test]
    fn missing_path_means_stdout() {
        assert_eq!(
            OutputSink::from_path(None, &Options::default()),
            OutputSink::Stdout
        );
    }
}

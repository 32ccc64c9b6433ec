//! Serialization options.

use docjson_core::Config;

/// How a run writes its document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Indent the output.
    pub pretty: bool,
    /// Append to an existing output file instead of truncating it.
    pub append: bool,
}

impl Options {
    /// Takes the `[output]` settings of a loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            pretty: config.output.pretty,
            append: config.output.append,
        }
    }

    /// Sets pretty printing.
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets append mode.
    #[must_use]
    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }
}

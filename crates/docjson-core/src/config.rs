//! Configuration types for docjson.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for docjson.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Where and how the JSON document is written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Indent the JSON output (default: compact).
    #[serde(default)]
    pub pretty: bool,

    /// Append to the output file instead of truncating it.
    #[serde(default)]
    pub append: bool,

    /// Output file; stdout when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.output.pretty);
        assert!(!config.output.append);
        assert!(config.output.path.is_none());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[output]
pretty = true
append = true
path = "build/api.json"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert!(config.output.pretty);
        assert!(config.output.append);
        assert_eq!(config.output.path, Some(PathBuf::from("build/api.json")));
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_output_key_is_rejected() {
        let err = Config::parse("[output]\nindent = 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/docjson.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

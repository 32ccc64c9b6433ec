//! Generate command implementation.

use anyhow::{Context, Result};
use docjson::{write_model, Options, OutputSink};
use std::path::PathBuf;

use crate::config_resolver::{self, ConfigSource};

/// Command-line arguments of `generate`.
pub struct Args {
    /// Model file.
    pub model: PathBuf,
    /// Output file override.
    pub output: Option<PathBuf>,
    /// Append mode override; `None` keeps the config value.
    pub append: Option<bool>,
    /// Pretty output override; `None` keeps the config value.
    pub pretty: Option<bool>,
}

/// Runs the generate command.
pub fn run(args: &Args, source: &ConfigSource) -> Result<()> {
    let config = config_resolver::load(source)?;
    let model = super::load_model(&args.model)?;

    let (options, sink) = effective(args, &config.output);
    tracing::info!("Writing {} types to {}", model.len(), describe(&sink));

    write_model(&model, &options, &sink).context("Failed to write JSON")?;
    Ok(())
}

/// Applies command-line overrides to the `[output]` table.
fn effective(args: &Args, output: &docjson::OutputConfig) -> (Options, OutputSink) {
    let options = Options {
        pretty: args.pretty.unwrap_or(output.pretty),
        append: args.append.unwrap_or(output.append),
    };
    let path = args.output.as_deref().or(output.path.as_deref());
    (options, OutputSink::from_path(path, &options))
}

fn describe(sink: &OutputSink) -> String {
    match sink {
        OutputSink::Stdout => "stdout".to_string(),
        OutputSink::File { path, .. } => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docjson::{OpenMode, OutputConfig};
    use std::fs;
    use tempfile::TempDir;

    fn args(output: Option<PathBuf>) -> Args {
        Args {
            model: PathBuf::from("model.json"),
            output,
            append: None,
            pretty: None,
        }
    }

    #[test]
    fn defaults_to_compact_stdout() {
        let (options, sink) = effective(&args(None), &OutputConfig::default());
        assert_eq!(options, Options::default());
        assert_eq!(sink, OutputSink::Stdout);
    }

    #[test]
    fn config_path_and_flags_apply() {
        let output = OutputConfig {
            pretty: true,
            append: true,
            path: Some(PathBuf::from("api.json")),
        };
        let (options, sink) = effective(&args(None), &output);
        assert!(options.pretty);
        assert_eq!(
            sink,
            OutputSink::File {
                path: PathBuf::from("api.json"),
                mode: OpenMode::Append
            }
        );
    }

    #[test]
    fn cli_output_overrides_config_path() {
        let output = OutputConfig {
            path: Some(PathBuf::from("from-config.json")),
            ..OutputConfig::default()
        };
        let mut a = args(Some(PathBuf::from("from-cli.json")));
        a.append = Some(true);
        let (_, sink) = effective(&a, &output);
        assert_eq!(
            sink,
            OutputSink::File {
                path: PathBuf::from("from-cli.json"),
                mode: OpenMode::Append
            }
        );
    }

    #[test]
    fn cli_can_switch_config_options_off() {
        let output = OutputConfig {
            pretty: true,
            append: true,
            path: Some(PathBuf::from("api.json")),
        };
        let mut a = args(None);
        a.append = Some(false);
        a.pretty = Some(false);
        let (options, sink) = effective(&a, &output);
        assert_eq!(options, Options::default());
        assert_eq!(
            sink,
            OutputSink::File {
                path: PathBuf::from("api.json"),
                mode: OpenMode::Truncate
            }
        );
    }

    #[test]
    fn run_writes_output_file() {
        let tmp = TempDir::new().unwrap();
        let model = tmp.path().join("model.json");
        fs::write(&model, r#"{ "types": [ { "name": "a.B" } ] }"#).unwrap();
        let out = tmp.path().join("api.json");

        let a = Args {
            model,
            output: Some(out.clone()),
            append: None,
            pretty: None,
        };
        run(&a, &ConfigSource::Default).unwrap();

        assert_eq!(
            fs::read_to_string(out).unwrap(),
            r#"{"classes":[{"name":"a.B","interfaces":[],"superclass":"","constructors":[],"fields":[],"methods":[]}]}"#
        );
    }

    #[test]
    fn run_fails_on_invalid_model() {
        let tmp = TempDir::new().unwrap();
        let model = tmp.path().join("model.json");
        fs::write(&model, r#"{ "types": [ { "name": "" } ] }"#).unwrap();

        let a = Args {
            model,
            output: Some(tmp.path().join("api.json")),
            append: None,
            pretty: None,
        };
        assert!(run(&a, &ConfigSource::Default).is_err());
    }
}

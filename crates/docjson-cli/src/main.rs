//! docjson CLI tool.
//!
//! Usage:
//! ```bash
//! docjson generate [OPTIONS] <MODEL>
//! docjson check <MODEL>
//! docjson init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Serialize parsed source declarations and their doc comments to JSON
#[derive(Parser)]
#[command(name = "docjson")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serialize a declaration model to JSON
    Generate {
        /// Declaration model (JSON)
        model: PathBuf,

        /// Output file (default: stdout, or `output.path` from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Append to the output file instead of truncating it
        #[arg(long, overrides_with = "truncate")]
        append: bool,

        /// Truncate the output file (overrides `output.append`)
        #[arg(long, overrides_with = "append")]
        truncate: bool,

        /// Indent the JSON output
        #[arg(long, overrides_with = "compact")]
        pretty: bool,

        /// Compact JSON output (overrides `output.pretty`)
        #[arg(long, overrides_with = "pretty")]
        compact: bool,
    },

    /// Validate a declaration model and summarize it
    Check {
        /// Declaration model (JSON)
        model: PathBuf,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // stdout carries the JSON document
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            model,
            output,
            append,
            truncate,
            pretty,
            compact,
        } => {
            let source = config_resolver::resolve(Path::new("."), cli.config.as_deref());
            let args = commands::generate::Args {
                model,
                output,
                append: switch(append, truncate),
                pretty: switch(pretty, compact),
            };
            commands::generate::run(&args, &source)
        }
        Commands::Check { model } => commands::check::run(&model),
        Commands::Init { force } => commands::init::run(Path::new("."), force),
    }
}

/// Maps an on/off flag pair to an override; `None` leaves the config value.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

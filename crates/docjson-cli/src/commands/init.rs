//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_NAME: &str = "docjson.toml";

const DEFAULT_CONFIG: &str = r#"# docjson configuration

[output]
# Indent the JSON document (default: compact)
pretty = false

# Append to the output file instead of truncating it
append = false

# Output file; stdout when unset
# path = "build/api.json"
"#;

/// Runs the init command.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;

    println!("Created {CONFIG_NAME}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_NAME} to configure output");
    println!("  2. Run: docjson generate model.json");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docjson::Config;
    use tempfile::TempDir;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_NAME), "# mine\n").unwrap();

        assert!(run(tmp.path(), false).is_err());
        assert_eq!(
            std::fs::read_to_string(tmp.path().join(CONFIG_NAME)).unwrap(),
            "# mine\n"
        );

        run(tmp.path(), true).unwrap();
        assert_eq!(
            std::fs::read_to_string(tmp.path().join(CONFIG_NAME)).unwrap(),
            DEFAULT_CONFIG
        );
    }
}

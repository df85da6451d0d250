//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Commented configuration template; every value is the built-in default
const TEMPLATE: &str = r#"# sixdot configuration
#
# Every key is optional. Command-line flags override these values.

[translation]
# Capital indicator rule:
#   "whole-word"  one indicator before a word written entirely in capitals
#                 (two or more letters), otherwise one before each capital
#   "per-letter"  one indicator before every capital letter
capitalization = "whole-word"

# Largest input accepted, in MB
max_input_mb = 1024

[output]
# Output format used when --format is not given: "text", "json" or "markdown"
default_format = "text"

# Print the source text before its Braille
include_source = false

# Indent JSON output
pretty_json = true

[performance]
# Translate several input files in parallel
parallel = false

# Number of worker threads for parallel translation (0 = one per CPU)
worker_threads = 0
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file");
        println!("2. Validate your configuration:");
        println!("   sixdot validate -c {}", self.output.display());
        println!("3. Use it for translation:");
        println!(
            "   sixdot translate -i input.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        TEMPLATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let config = CliConfig::from_toml(GenerateConfigArgs::template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("sixdot.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };

        args.execute().unwrap();
        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[translation]"));
        assert!(content.contains("capitalization = \"whole-word\""));
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("sixdot.toml");
        fs::write(&output_path, "# mine").unwrap();

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "# mine");

        let forced = GenerateConfigArgs {
            output: output_path.clone(),
            force: true,
        };
        forced.execute().unwrap();
        assert!(fs::read_to_string(&output_path)
            .unwrap()
            .contains("[output]"));
    }
}

//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::from_file(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!(
                    "  Capitalization: {}",
                    config.translation.capitalization.as_str()
                );
                println!("  Max input: {} MB", config.translation.max_input_mb);
                println!("  Default format: {}", config.output.default_format.as_str());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("sixdot.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("sixdot.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "[translation]\ncapitalization = \"per-letter\"\n[output]\ndefault_format = \"markdown\"\n"
        )
        .unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[translation]\nmax_input_mb = 0\n").unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }
}

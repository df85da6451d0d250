//! Configuration module

use crate::error::CliError;
use crate::output::{FormatOptions, OutputFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sixdot_core::CapitalizationRule;
use std::fs;
use std::path::Path;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Translation configuration
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Translation-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TranslationConfig {
    /// Capital-indicator rule
    pub capitalization: CapitalizationRule,

    /// Largest input accepted, in MB
    pub max_input_mb: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            capitalization: CapitalizationRule::WholeWord,
            max_input_mb: 1024,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Print the source text next to its Braille
    pub include_source: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            include_source: false,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Translate several input files in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges the TOML schema cannot express
    pub fn validate(&self) -> Result<(), CliError> {
        if self.translation.max_input_mb == 0 {
            return Err(CliError::ConfigError(
                "max_input_mb must be greater than 0".to_string(),
            ));
        }

        if self.max_input_bytes().is_none() {
            return Err(CliError::ConfigError(format!(
                "max_input_mb {} is too large",
                self.translation.max_input_mb
            )));
        }

        Ok(())
    }

    /// Input size limit in bytes, if it fits in `usize`
    pub fn max_input_bytes(&self) -> Option<usize> {
        self.translation
            .max_input_mb
            .checked_mul(BYTES_PER_MB)
            .and_then(|bytes| usize::try_from(bytes).ok())
    }

    /// Build the core configuration
    pub fn to_core_config(&self) -> Result<sixdot_core::Config, CliError> {
        let max_input_bytes = self.max_input_bytes().ok_or_else(|| {
            CliError::ConfigError(format!(
                "max_input_mb {} is too large",
                self.translation.max_input_mb
            ))
        })?;

        let config = sixdot_core::Config::builder()
            .capitalization(self.translation.capitalization)
            .max_input_bytes(max_input_bytes)
            .build()?;
        Ok(config)
    }

    /// Formatter options from the output section
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            include_source: self.output.include_source,
            pretty_json: self.output.pretty_json,
        }
    }
}

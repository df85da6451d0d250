//! Configuration API for translation

use std::str::FromStr;

use crate::api::Error;
use crate::domain::CapitalizationRule;

/// Default configuration constants
pub mod defaults {
    /// Largest input accepted by `process` in bytes (1GB)
    pub const MAX_INPUT_BYTES: usize = 1024 * 1024 * 1024;
}

/// Translation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) capitalization: CapitalizationRule,
    pub(crate) max_input_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capitalization: CapitalizationRule::default(),
            max_input_bytes: defaults::MAX_INPUT_BYTES,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Capital-indicator rule
    pub fn capitalization(&self) -> CapitalizationRule {
        self.capitalization
    }

    /// Largest input accepted by `process`, in bytes
    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.max_input_bytes == 0 {
            return Err(Error::Configuration(
                "max_input_bytes must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    capitalization: Option<CapitalizationRule>,
    max_input_bytes: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capital-indicator rule
    pub fn capitalization(mut self, rule: CapitalizationRule) -> Self {
        self.capitalization = Some(rule);
        self
    }

    /// Set the input size limit in bytes
    pub fn max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = Some(bytes);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(rule) = self.capitalization {
            config.capitalization = rule;
        }

        if let Some(bytes) = self.max_input_bytes {
            config.max_input_bytes = bytes;
        }

        config.validate()?;
        Ok(config)
    }
}

impl FromStr for CapitalizationRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "whole-word" | "word" => Ok(CapitalizationRule::WholeWord),
            "per-letter" | "letter" => Ok(CapitalizationRule::PerLetter),
            other => Err(Error::Configuration(format!(
                "unknown capitalization rule '{other}' (expected 'whole-word' or 'per-letter')"
            ))),
        }
    }
}

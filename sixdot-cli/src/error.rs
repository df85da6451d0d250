//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Translation error from core
    TranslationError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::TranslationError(msg) => write!(f, "Translation error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<sixdot_core::Error> for CliError {
    fn from(error: sixdot_core::Error) -> Self {
        match error {
            sixdot_core::Error::Configuration(msg) => CliError::ConfigError(msg),
            other => CliError::TranslationError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("entrada.txt".to_string());
        assert_eq!(error.to_string(), "File not found: entrada.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("max_input_mb must be greater than 0".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: max_input_mb must be greater than 0"
        );
    }

    #[test]
    fn test_translation_error_display() {
        let error = CliError::TranslationError("input too large".to_string());
        assert_eq!(error.to_string(), "Translation error: input too large");
    }

    #[test]
    fn test_from_core_error() {
        let config: CliError = sixdot_core::Error::Configuration("bad rule".into()).into();
        assert!(matches!(config, CliError::ConfigError(ref msg) if msg == "bad rule"));

        let input: CliError = sixdot_core::Error::InvalidInput("too large".into()).into();
        assert_eq!(
            input.to_string(),
            "Translation error: Invalid input: too large"
        );
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("⠁".to_string());
        assert_eq!(success.unwrap(), "⠁");

        let failure: CliResult<String> = Err(CliError::FileNotFound("x".into()).into());
        assert!(failure.unwrap_err().to_string().contains("File not found"));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("traducción/año ñandú.txt".to_string());
        assert_eq!(error.to_string(), "File not found: traducción/año ñandú.txt");
    }
}

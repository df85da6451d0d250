//! Error types for the API

use thiserror::Error;

/// Error type for API operations
///
/// Translation itself never fails; these errors come from configuration and
/// from turning an [`Input`](crate::api::Input) into text.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input rejected before translation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Infrastructure error (I/O, encoding)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;

/*!
 * Error types for the estcheck application.
 *
 * The checkers themselves never fail; these types cover malformed requests,
 * configuration problems and I/O at the process boundary.
 */

use thiserror::Error;

/// Errors raised while interpreting a request or configuration
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// The request is not a JSON object or a field has the wrong shape
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A required field of the request is absent
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file or stream operation
    #[error("I/O error: {0}")]
    Io(String),

    /// Error encoding or decoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from request or configuration validation
    #[error("Validation error: {0}")]
    Validator(#[from] ValidatorError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

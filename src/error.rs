//! Error types for the infragen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Reply parse failures never show up here: the normalizer falls back to the
//! raw reply instead of failing the run.

use crate::client::ClientError;
use crate::exit_codes;
use thiserror::Error;

/// Main error type for infragen operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum InfragenError {
    /// User provided invalid input or configuration values.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be read or parsed.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// The model service call failed.
    #[error("Model request failed: {0}")]
    ModelError(#[from] ClientError),

    /// The generated artifact could not be written.
    #[error("Write failed: {0}")]
    WriteError(String),
}

impl InfragenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            InfragenError::UserError(_) => exit_codes::USER_ERROR,
            InfragenError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            InfragenError::ModelError(_) => exit_codes::MODEL_FAILURE,
            InfragenError::WriteError(_) => exit_codes::WRITE_FAILURE,
        }
    }
}

/// Result type alias for infragen operations.
pub type Result<T> = std::result::Result<T, InfragenError>;

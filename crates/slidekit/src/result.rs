//! Result and error types for slidekit.
//!
//! Only the fallible edges of the crate (configuration loading, scripted
//! simulation input) return errors. The controller itself absorbs every
//! runtime condition into its state machine.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for slidekit operations
pub type SlideResult<T> = Result<T, SlideError>;

/// Errors that can occur in slidekit
#[derive(Debug, Error)]
pub enum SlideError {
    /// Configuration file has an extension we cannot parse
    #[error("Unsupported configuration format: {}", path.display())]
    UnsupportedFormat {
        /// Offending path
        path: PathBuf,
    },

    /// A caller-supplied value is out of range
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl SlideError {
    /// Create an invalid-argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

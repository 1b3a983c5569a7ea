//! Application-wide error types.
//!
//! These cover the process boundary (configuration, reading and decoding
//! input documents). Validation rejections are not errors at this level;
//! they are a normal outcome reported by the engine.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An input document could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path of the document.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An input document is not valid JSON for the expected type.
    #[error("Failed to decode {path}: {source}")]
    Decode {
        /// Path of the document.
        path: String,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
}

impl AppError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io { .. } => "IO_ERROR",
            Self::Decode { .. } => "DECODE_ERROR",
        }
    }
}

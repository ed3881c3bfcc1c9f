//! Error types shared across framekit crates.
//!
//! The animation and geometry cores are total and never produce these;
//! they surface from configuration, argument parsing and logging setup.

use std::path::PathBuf;

/// Top-level error type for framekit operations.
#[derive(Debug, thiserror::Error)]
pub enum FrameKitError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using FrameKitError.
pub type FrameKitResult<T> = Result<T, FrameKitError>;

impl FrameKitError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

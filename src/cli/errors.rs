//! CLI-specific error types
//!
//! Every variant is fatal to the command. Per-record lookup failures are
//! reported in the command output and never surface here.

use std::io;

use thiserror::Error;

use crate::index::IndexError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("SEEKDEX_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    #[error("SEEKDEX_CLI_IO_ERROR: {0}")]
    Io(#[from] io::Error),

    #[error("SEEKDEX_CLI_IO_ERROR: JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Index(#[from] IndexError),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "SEEKDEX_CLI_CONFIG_ERROR",
            Self::Io(_) | Self::Json(_) => "SEEKDEX_CLI_IO_ERROR",
            Self::Index(e) => e.code().code(),
        }
    }
}

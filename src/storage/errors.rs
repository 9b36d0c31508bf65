//! Storage error types
//!
//! Error codes:
//! - SEEKDEX_DATA_IO_ERROR (ERROR severity)
//! - SEEKDEX_INVALID_OFFSET (ERROR severity)
//!
//! Storage errors are scoped to a single lookup. They never invalidate the
//! directory or abort lookups of other identifiers.

use std::fmt;
use std::io;

/// Severity levels for storage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The lookup fails, the process continues
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Storage-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorCode {
    /// Data file could not be opened, positioned or read
    DataIoError,
    /// Directory resolved to an offset that is not a valid seek target
    InvalidOffset,
}

impl StorageErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            StorageErrorCode::DataIoError => "SEEKDEX_DATA_IO_ERROR",
            StorageErrorCode::InvalidOffset => "SEEKDEX_INVALID_OFFSET",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

impl fmt::Display for StorageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Storage error type with lookup context
#[derive(Debug)]
pub struct StorageError {
    /// Error code
    code: StorageErrorCode,
    /// Human-readable message
    message: String,
    /// Optional details about the lookup
    details: Option<String>,
    /// Underlying IO error if applicable
    source: Option<io::Error>,
}

impl StorageError {
    /// Create a data file I/O error for a specific record
    pub fn io_error_for_record(
        record_id: i32,
        offset: i64,
        message: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self {
            code: StorageErrorCode::DataIoError,
            message: message.into(),
            details: Some(format!("record_id: {}, byte_offset: {}", record_id, offset)),
            source: Some(source),
        }
    }

    /// Create an invalid offset error
    pub fn invalid_offset(record_id: i32, offset: i64) -> Self {
        Self {
            code: StorageErrorCode::InvalidOffset,
            message: format!("Offset {} is not a valid position in the data file", offset),
            details: Some(format!("record_id: {}", record_id)),
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StorageErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns additional error details
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Storage errors never terminate the process
    pub fn is_fatal(&self) -> bool {
        false
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

//! Index error types
//!
//! Error codes:
//! - SEEKDEX_INDEX_IO_ERROR (FATAL to the load)
//!
//! A missing index file is not an error. It is reported through
//! `LoadedIndex::found` and carries the informational code
//! `SEEKDEX_INDEX_MISSING`.

use std::fmt;
use std::io;

/// Code reported when the index file does not exist.
pub const INDEX_MISSING_CODE: &str = "SEEKDEX_INDEX_MISSING";

/// Severity levels for index errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The load is aborted, no directory is produced
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Index-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexErrorCode {
    /// Index file exists but could not be opened or fully read
    IndexIoError,
}

impl IndexErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            IndexErrorCode::IndexIoError => "SEEKDEX_INDEX_IO_ERROR",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Fatal // Any index failure aborts the load
    }
}

impl fmt::Display for IndexErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Index error type with full context
#[derive(Debug)]
pub struct IndexError {
    /// Error code
    code: IndexErrorCode,
    /// Human-readable message
    message: String,
    /// Byte position in the index file, if the failure happened mid-stream
    offset: Option<u64>,
    /// Underlying IO error
    source: Option<io::Error>,
}

impl IndexError {
    /// Create an index I/O error
    pub fn io_error(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: IndexErrorCode::IndexIoError,
            message: message.into(),
            offset: None,
            source: Some(source),
        }
    }

    /// Create an index I/O error that occurred at a byte position
    pub fn io_error_at(offset: u64, message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: IndexErrorCode::IndexIoError,
            message: message.into(),
            offset: Some(offset),
            source: Some(source),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> IndexErrorCode {
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

    /// Returns the index file position if applicable
    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        true
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)?;
        if let Some(offset) = self.offset {
            write!(f, " (index_offset: {})", offset)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_codes() {
        assert_eq!(IndexErrorCode::IndexIoError.code(), "SEEKDEX_INDEX_IO_ERROR");
        assert_eq!(INDEX_MISSING_CODE, "SEEKDEX_INDEX_MISSING");
    }

    #[test]
    fn test_io_error_is_fatal() {
        let err = IndexError::io_error(
            "permission denied",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.is_fatal());
        assert_eq!(err.severity(), Severity::Fatal);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_display() {
        let err = IndexError::io_error_at(
            24,
            "short read",
            io::Error::new(io::ErrorKind::Other, "device gone"),
        );
        let display = format!("{}", err);
        assert!(display.contains("SEEKDEX_INDEX_IO_ERROR"));
        assert!(display.contains("FATAL"));
        assert!(display.contains("index_offset: 24"));
        assert!(display.contains("device gone"));
    }
}

//! Observable events for seekdex
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration resolved
    ConfigLoaded,

    // Index loading
    /// Index load begins
    IndexLoadStart,
    /// Index decoded into a directory
    IndexLoaded,
    /// Index file does not exist, directory is empty
    IndexMissing,
    /// Index file could not be read
    IndexLoadFailed,

    // Record lookups
    /// Payload read for a record
    RecordFound,
    /// Identifier absent from the directory
    RecordNotFound,
    /// Offset resolved to zero readable bytes
    RecordEmpty,
    /// Data file could not be opened or read
    RecordReadFailed,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::IndexLoadStart => "INDEX_LOAD_START",
            Event::IndexLoaded => "INDEX_LOADED",
            Event::IndexMissing => "INDEX_MISSING",
            Event::IndexLoadFailed => "INDEX_LOAD_FAILED",
            Event::RecordFound => "RECORD_FOUND",
            Event::RecordNotFound => "RECORD_NOT_FOUND",
            Event::RecordEmpty => "RECORD_EMPTY",
            Event::RecordReadFailed => "RECORD_READ_FAILED",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::IndexLoadStart | Event::RecordFound => Severity::Trace,
            Event::ConfigLoaded | Event::IndexLoaded => Severity::Info,
            Event::IndexMissing | Event::RecordNotFound | Event::RecordEmpty => Severity::Warn,
            Event::IndexLoadFailed | Event::RecordReadFailed => Severity::Error,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Record and lookup outcome types
//!
//! The data file has no record framing. A record is whatever bytes follow
//! the resolved offset, capped at a fixed maximum length. The true record
//! boundary is unknown to the reader.

use std::borrow::Cow;
use std::fmt;

use crate::index::{DataOffset, RecordId};

/// Maximum number of bytes read for a single record
pub const MAX_RECORD_LEN: usize = 100;

/// Bytes read from the data file at a resolved offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Identifier that was looked up
    pub record_id: RecordId,
    /// Offset the read started at
    pub offset: DataOffset,
    /// Raw payload, never empty
    pub payload: Vec<u8>,
}

impl Record {
    /// Number of bytes actually read
    pub fn bytes_read(&self) -> usize {
        self.payload.len()
    }

    /// Raw payload bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload rendered as text, replacing invalid UTF-8 sequences.
    pub fn payload_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}

/// Status of a single lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    /// Payload read
    Found,
    /// Identifier absent from the directory
    NotFound,
    /// Offset resolved but zero bytes available
    Empty,
}

impl LookupStatus {
    /// Returns the status name used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStatus::Found => "found",
            LookupStatus::NotFound => "not_found",
            LookupStatus::Empty => "empty",
        }
    }

    /// Returns the reporting code for non-payload outcomes
    pub fn code(&self) -> Option<&'static str> {
        match self {
            LookupStatus::Found => None,
            LookupStatus::NotFound => Some("SEEKDEX_RECORD_NOT_FOUND"),
            LookupStatus::Empty => Some("SEEKDEX_RECORD_EMPTY"),
        }
    }
}

impl fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Successful outcome of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Payload read at the resolved offset
    Found(Record),
    /// Identifier absent from the directory; no data file I/O was done
    NotFound,
    /// Offset resolved but at or past the end of the data file
    Empty {
        /// Resolved offset
        offset: DataOffset,
    },
}

impl Lookup {
    /// Returns the status of this outcome
    pub fn status(&self) -> LookupStatus {
        match self {
            Lookup::Found(_) => LookupStatus::Found,
            Lookup::NotFound => LookupStatus::NotFound,
            Lookup::Empty { .. } => LookupStatus::Empty,
        }
    }

    /// Returns the record if one was read
    pub fn record(&self) -> Option<&Record> {
        match self {
            Lookup::Found(record) => Some(record),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the record if one was read
    pub fn into_record(self) -> Option<Record> {
        match self {
            Lookup::Found(record) => Some(record),
            _ => None,
        }
    }

    /// Payload bytes; empty for non-found outcomes
    pub fn bytes(&self) -> &[u8] {
        self.record().map(Record::payload).unwrap_or(&[])
    }
}

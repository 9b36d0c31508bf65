//! Record storage subsystem for seekdex
//!
//! The data file is an opaque byte stream. Records are located through the
//! index directory and read with a bounded positioned read.
//!
//! # Design Principles
//!
//! - Read-only access to the data file
//! - One open/close per lookup, released on every exit path
//! - Not-found and empty are outcomes, not errors
//! - Failures are isolated to the lookup that produced them

mod errors;
mod locator;
mod record;

pub use errors::{Severity, StorageError, StorageErrorCode, StorageResult};
pub use locator::{locate, locate_with_limit, RecordLocator};
pub use record::{Lookup, LookupStatus, Record, MAX_RECORD_LEN};

//! Index subsystem for seekdex
//!
//! Loads a fixed-width binary index file into an in-memory directory that
//! translates record identifiers into data file offsets.
//!
//! # Design Principles
//!
//! - Read-only: the index file is never written back
//! - Built once, immutable afterwards
//! - Last write wins for duplicate keys
//! - Missing index is reported, not failed

mod directory;
mod entry;
mod errors;
mod loader;

pub use directory::IndexDirectory;
pub use entry::{
    encode_entries, DataOffset, IndexEntry, RecordId, ENTRY_SIZE, KEY_SIZE, OFFSET_SIZE,
};
pub use errors::{IndexError, IndexErrorCode, IndexResult, Severity, INDEX_MISSING_CODE};
pub use loader::{load_index, read_directory, LoadedIndex};

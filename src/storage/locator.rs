//! Record locator
//!
//! Resolves a record identifier through the directory, then performs a
//! positioned read against the data file.
//!
//! Per lookup:
//!
//! ```text
//! Start -> Resolve -> NotFound
//!                  -> Positioned -> Read -> Empty
//!                                        -> Found
//!                  -> DataIoError
//! ```
//!
//! The data file is opened fresh for every lookup and closed when the
//! handle goes out of scope, on every exit path. There is no retry.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::index::{DataOffset, IndexDirectory, RecordId};
use crate::observability::{log_event_with_fields, Event};

use super::errors::{StorageError, StorageResult};
use super::record::{Lookup, Record, MAX_RECORD_LEN};

/// Looks up `record_id` and reads up to `MAX_RECORD_LEN` bytes at its offset.
pub fn locate(
    data_path: &Path,
    directory: &IndexDirectory,
    record_id: RecordId,
) -> StorageResult<Lookup> {
    locate_with_limit(data_path, directory, record_id, MAX_RECORD_LEN)
}

/// Same as `locate` with an explicit read cap.
pub fn locate_with_limit(
    data_path: &Path,
    directory: &IndexDirectory,
    record_id: RecordId,
    max_len: usize,
) -> StorageResult<Lookup> {
    let id_str = record_id.to_string();

    let offset = match directory.get(record_id) {
        Some(offset) => offset,
        None => {
            log_event_with_fields(Event::RecordNotFound, &[("record_id", &id_str)]);
            return Ok(Lookup::NotFound);
        }
    };

    let payload = match read_at(data_path, record_id, offset, max_len) {
        Ok(payload) => payload,
        Err(e) => {
            log_event_with_fields(
                Event::RecordReadFailed,
                &[
                    ("code", e.code().code()),
                    ("offset", &offset.to_string()),
                    ("record_id", &id_str),
                ],
            );
            return Err(e);
        }
    };

    if payload.is_empty() {
        log_event_with_fields(
            Event::RecordEmpty,
            &[("offset", &offset.to_string()), ("record_id", &id_str)],
        );
        return Ok(Lookup::Empty { offset });
    }

    log_event_with_fields(
        Event::RecordFound,
        &[
            ("bytes_read", &payload.len().to_string()),
            ("offset", &offset.to_string()),
            ("record_id", &id_str),
        ],
    );

    Ok(Lookup::Found(Record {
        record_id,
        offset,
        payload,
    }))
}

/// Opens the data file, seeks to `offset` and reads up to `max_len` bytes.
///
/// Seeking past the end is allowed and yields an empty buffer.
fn read_at(
    data_path: &Path,
    record_id: RecordId,
    offset: DataOffset,
    max_len: usize,
) -> StorageResult<Vec<u8>> {
    let position =
        u64::try_from(offset).map_err(|_| StorageError::invalid_offset(record_id, offset))?;

    let mut file = File::open(data_path).map_err(|e| {
        StorageError::io_error_for_record(
            record_id,
            offset,
            format!("Failed to open data file: {}", data_path.display()),
            e,
        )
    })?;

    file.seek(SeekFrom::Start(position)).map_err(|e| {
        StorageError::io_error_for_record(record_id, offset, "Failed to seek data file", e)
    })?;

    // The cap is caller-controlled; the buffer grows with what is actually read
    let mut payload = Vec::with_capacity(max_len.min(MAX_RECORD_LEN));
    file.take(max_len as u64)
        .read_to_end(&mut payload)
        .map_err(|e| {
            StorageError::io_error_for_record(record_id, offset, "Failed to read record", e)
        })?;

    Ok(payload)
}

/// Data file bound to a directory, for repeated lookups.
#[derive(Debug, Clone)]
pub struct RecordLocator<'a> {
    data_path: PathBuf,
    directory: &'a IndexDirectory,
    max_len: usize,
}

impl<'a> RecordLocator<'a> {
    /// Creates a locator with the default read cap.
    pub fn new(data_path: impl Into<PathBuf>, directory: &'a IndexDirectory) -> Self {
        Self {
            data_path: data_path.into(),
            directory,
            max_len: MAX_RECORD_LEN,
        }
    }

    /// Overrides the per-record read cap.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Returns the data file path
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Returns the per-record read cap
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Looks up a single record.
    pub fn locate(&self, record_id: RecordId) -> StorageResult<Lookup> {
        locate_with_limit(&self.data_path, self.directory, record_id, self.max_len)
    }

    /// Looks up every identifier independently.
    ///
    /// A failure for one identifier never prevents the others from being
    /// processed. Results are returned in input order.
    pub fn locate_all<I>(&self, record_ids: I) -> Vec<(RecordId, StorageResult<Lookup>)>
    where
        I: IntoIterator<Item = RecordId>,
    {
        record_ids
            .into_iter()
            .map(|id| (id, self.locate(id)))
            .collect()
    }
}

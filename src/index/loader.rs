//! Index file loader
//!
//! Reads an index file sequentially and decodes it into an `IndexDirectory`.
//!
//! # Behavior
//!
//! - Missing file: empty directory, `found = false`, not an error
//! - Whole entries are decoded while at least `ENTRY_SIZE` bytes remain
//! - A ragged tail shorter than `ENTRY_SIZE` is ignored
//! - Any genuine I/O failure aborts the load; no partial directory is returned

use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::Path;

use crate::observability::{log_event_with_fields, Event};

use super::directory::IndexDirectory;
use super::entry::{IndexEntry, ENTRY_SIZE};
use super::errors::{IndexError, IndexResult};

/// Outcome of loading an index file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedIndex {
    /// Decoded directory (empty when the file was missing)
    pub directory: IndexDirectory,
    /// Whether the index file existed
    pub found: bool,
}

impl LoadedIndex {
    /// Splits into the directory and the found flag
    pub fn into_parts(self) -> (IndexDirectory, bool) {
        (self.directory, self.found)
    }
}

/// Loads the index file at `path`.
pub fn load_index(path: &Path) -> IndexResult<LoadedIndex> {
    let path_str = path.display().to_string();
    log_event_with_fields(Event::IndexLoadStart, &[("path", &path_str)]);

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log_event_with_fields(Event::IndexMissing, &[("path", &path_str)]);
            return Ok(LoadedIndex::default());
        }
        Err(e) => {
            log_event_with_fields(
                Event::IndexLoadFailed,
                &[("path", &path_str), ("reason", &e.to_string())],
            );
            return Err(IndexError::io_error(
                format!("Failed to open index file: {}", path_str),
                e,
            ));
        }
    };

    let directory = read_directory(BufReader::new(file)).map_err(|e| {
        log_event_with_fields(
            Event::IndexLoadFailed,
            &[("path", &path_str), ("reason", e.message())],
        );
        e
    })?;

    log_event_with_fields(
        Event::IndexLoaded,
        &[("entries", &directory.len().to_string()), ("path", &path_str)],
    );

    Ok(LoadedIndex {
        directory,
        found: true,
    })
}

/// Decodes entries from any byte source until fewer than `ENTRY_SIZE`
/// bytes remain.
pub fn read_directory<R: Read>(mut reader: R) -> IndexResult<IndexDirectory> {
    let mut directory = IndexDirectory::new();
    let mut position: u64 = 0;
    let mut buf = [0u8; ENTRY_SIZE];

    loop {
        let filled = fill_entry(&mut reader, &mut buf).map_err(|e| {
            IndexError::io_error_at(position, "Failed to read index entry", e)
        })?;

        if filled < ENTRY_SIZE {
            // Ragged tail or clean end
            break;
        }

        directory.insert(IndexEntry::decode(&buf));
        position += ENTRY_SIZE as u64;
    }

    Ok(directory)
}

/// Reads until `buf` is full or the source is exhausted.
///
/// Returns the number of bytes placed in `buf`.
fn fill_entry<R: Read>(reader: &mut R, buf: &mut [u8; ENTRY_SIZE]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < ENTRY_SIZE {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

//! Index entry binary format
//!
//! The index file is a headerless concatenation of fixed-width entries:
//!
//! ```text
//! +------------------+
//! | Key              | (i32 BE)
//! +------------------+
//! | Offset           | (i64 BE)
//! +------------------+
//! ```
//!
//! There is no magic number, version or checksum. A trailing partial
//! entry (fewer than `ENTRY_SIZE` bytes) is ignored by readers.

/// Size in bytes of the key field
pub const KEY_SIZE: usize = 4;

/// Size in bytes of the offset field
pub const OFFSET_SIZE: usize = 8;

/// Size in bytes of one encoded entry
pub const ENTRY_SIZE: usize = KEY_SIZE + OFFSET_SIZE;

/// Record identifier as stored in the index
pub type RecordId = i32;

/// Byte position in the data file as stored in the index.
///
/// Signed on disk; negative values are representable but are not valid
/// seek targets.
pub type DataOffset = i64;

/// One (key, offset) pair of the index file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexEntry {
    /// Record identifier
    pub key: RecordId,
    /// Byte position of the record in the data file
    pub offset: DataOffset,
}

impl IndexEntry {
    /// Create a new entry
    pub fn new(key: RecordId, offset: DataOffset) -> Self {
        Self { key, offset }
    }

    /// Encode to the 12-byte big-endian on-disk form.
    pub fn encode(&self) -> [u8; ENTRY_SIZE] {
        let mut buf = [0u8; ENTRY_SIZE];
        buf[..KEY_SIZE].copy_from_slice(&self.key.to_be_bytes());
        buf[KEY_SIZE..].copy_from_slice(&self.offset.to_be_bytes());
        buf
    }

    /// Decode one entry from exactly `ENTRY_SIZE` bytes.
    pub fn decode(buf: &[u8; ENTRY_SIZE]) -> Self {
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(&buf[..KEY_SIZE]);
        let mut offset = [0u8; OFFSET_SIZE];
        offset.copy_from_slice(&buf[KEY_SIZE..]);

        Self {
            key: i32::from_be_bytes(key),
            offset: i64::from_be_bytes(offset),
        }
    }

    /// Decode the entry at the start of `buf`.
    ///
    /// Returns `None` if fewer than `ENTRY_SIZE` bytes are available.
    pub fn decode_prefix(buf: &[u8]) -> Option<Self> {
        let head: &[u8; ENTRY_SIZE] = buf.get(..ENTRY_SIZE)?.try_into().ok()?;
        Some(Self::decode(head))
    }
}

/// Encode a sequence of entries, in order, into index file bytes.
pub fn encode_entries(entries: &[IndexEntry]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(entries.len() * ENTRY_SIZE);
    for entry in entries {
        buf.extend_from_slice(&entry.encode());
    }
    buf
}

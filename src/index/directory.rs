//! In-memory index directory
//!
//! Maps record identifiers to data file offsets. Built once from the full
//! contents of an index file and never mutated afterwards.
//!
//! Keys are not validated for uniqueness: when the same key appears more
//! than once, the last occurrence in file order wins.

use std::collections::{BTreeMap, HashMap};

use super::entry::{encode_entries, DataOffset, IndexEntry, RecordId, ENTRY_SIZE};

/// Key to offset mapping decoded from an index file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexDirectory {
    offsets: HashMap<RecordId, DataOffset>,
}

impl IndexDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from entries in file order. Last write wins.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = IndexEntry>,
    {
        let mut directory = Self::new();
        for entry in entries {
            directory.insert(entry);
        }
        directory
    }

    /// Decodes index file bytes held in memory.
    ///
    /// Consumes whole entries while at least `ENTRY_SIZE` bytes remain and
    /// ignores any ragged tail.
    pub fn decode(bytes: &[u8]) -> Self {
        Self::from_entries(bytes.chunks_exact(ENTRY_SIZE).filter_map(IndexEntry::decode_prefix))
    }

    /// Encodes the directory as index file bytes, entries sorted by key.
    pub fn encode(&self) -> Vec<u8> {
        encode_entries(&self.sorted_entries())
    }

    pub(crate) fn insert(&mut self, entry: IndexEntry) {
        self.offsets.insert(entry.key, entry.offset);
    }

    /// Resolves a record identifier to its data file offset.
    pub fn get(&self, key: RecordId) -> Option<DataOffset> {
        self.offsets.get(&key).copied()
    }

    /// Returns whether the identifier is present
    pub fn contains(&self, key: RecordId) -> bool {
        self.offsets.contains_key(&key)
    }

    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns whether the directory has no entries
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Iterates entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = IndexEntry> + '_ {
        self.offsets
            .iter()
            .map(|(&key, &offset)| IndexEntry::new(key, offset))
    }

    /// Entries sorted ascending by key, for deterministic output.
    pub fn sorted_entries(&self) -> Vec<IndexEntry> {
        self.offsets
            .iter()
            .collect::<BTreeMap<_, _>>()
            .into_iter()
            .map(|(&key, &offset)| IndexEntry::new(key, offset))
            .collect()
    }
}

impl FromIterator<IndexEntry> for IndexDirectory {
    fn from_iter<I: IntoIterator<Item = IndexEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_directory() {
        let dir = IndexDirectory::new();
        assert!(dir.is_empty());
        assert_eq!(dir.get(42), None);
    }

    #[test]
    fn test_last_write_wins() {
        let dir = IndexDirectory::from_entries([
            IndexEntry::new(1, 100),
            IndexEntry::new(2, 200),
            IndexEntry::new(1, 300),
        ]);
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.get(1), Some(300));
        assert_eq!(dir.get(2), Some(200));
    }

    #[test]
    fn test_decode_ignores_ragged_tail() {
        let mut bytes = encode_entries(&[IndexEntry::new(5, 50)]);
        bytes.extend_from_slice(&[0, 0, 0, 6, 0, 0, 0]);
        let dir = IndexDirectory::decode(&bytes);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get(5), Some(50));
        assert!(!dir.contains(6));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(IndexDirectory::decode(&[]).is_empty());
    }

    #[test]
    fn test_sorted_entries_deterministic() {
        let dir: IndexDirectory = [
            IndexEntry::new(30, 3),
            IndexEntry::new(-4, 0),
            IndexEntry::new(10, 1),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = dir.sorted_entries().iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![-4, 10, 30]);
    }

    #[test]
    fn test_encode_then_decode_same_mapping() {
        let dir = IndexDirectory::from_entries([
            IndexEntry::new(1, 0),
            IndexEntry::new(2, 10),
            IndexEntry::new(3, 25),
        ]);
        assert_eq!(IndexDirectory::decode(&dir.encode()), dir);
    }
}

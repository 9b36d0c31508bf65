//! Property tests for index decoding
//!
//! - n whole entries decode to at most n keys
//! - Every key maps to the last offset written for it
//! - A ragged tail never changes the result
//! - Streaming and in-memory decoding agree

use proptest::prelude::*;
use seekdex::index::{encode_entries, read_directory, IndexDirectory, IndexEntry, ENTRY_SIZE};
use std::collections::HashMap;
use std::io::Cursor;

fn entries_strategy() -> impl Strategy<Value = Vec<IndexEntry>> {
    // Narrow key range so duplicates actually occur
    prop::collection::vec((-20i32..20, any::<i64>()), 0..64)
        .prop_map(|pairs| pairs.into_iter().map(|(k, o)| IndexEntry::new(k, o)).collect())
}

proptest! {
    #[test]
    fn prop_at_most_n_entries(entries in entries_strategy()) {
        let directory = IndexDirectory::decode(&encode_entries(&entries));
        prop_assert!(directory.len() <= entries.len());
    }

    #[test]
    fn prop_last_write_wins(entries in entries_strategy()) {
        let directory = IndexDirectory::decode(&encode_entries(&entries));

        let mut expected = HashMap::new();
        for e in &entries {
            expected.insert(e.key, e.offset);
        }

        prop_assert_eq!(directory.len(), expected.len());
        for (key, offset) in expected {
            prop_assert_eq!(directory.get(key), Some(offset));
        }
    }

    #[test]
    fn prop_tail_ignored(
        entries in entries_strategy(),
        tail in prop::collection::vec(any::<u8>(), 1..ENTRY_SIZE),
    ) {
        let whole = encode_entries(&entries);
        let mut ragged = whole.clone();
        ragged.extend_from_slice(&tail);

        prop_assert_eq!(IndexDirectory::decode(&ragged), IndexDirectory::decode(&whole));
    }

    #[test]
    fn prop_streaming_matches_in_memory(
        entries in entries_strategy(),
        tail in prop::collection::vec(any::<u8>(), 0..ENTRY_SIZE),
    ) {
        let mut bytes = encode_entries(&entries);
        bytes.extend_from_slice(&tail);

        let streamed = read_directory(Cursor::new(bytes.clone())).unwrap();
        prop_assert_eq!(streamed, IndexDirectory::decode(&bytes));
    }
}

//! JSON line output for CLI commands
//!
//! Each report is one JSON object on its own line.

use std::io::Write;

use serde_json::{json, Value};

use crate::index::{LoadedIndex, INDEX_MISSING_CODE};
use crate::storage::{Lookup, StorageResult};

use super::errors::CliResult;

/// Write one JSON value followed by a newline
pub fn write_json<W: Write>(out: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Notice emitted when the index file does not exist
pub fn index_missing_report(index_path: &str) -> Value {
    json!({
        "status": "index_missing",
        "code": INDEX_MISSING_CODE,
        "path": index_path,
    })
}

/// Report line for a single lookup outcome
pub fn lookup_report(record_id: i32, result: &StorageResult<Lookup>) -> Value {
    match result {
        Ok(Lookup::Found(record)) => json!({
            "id": record_id,
            "status": "found",
            "offset": record.offset,
            "bytes_read": record.bytes_read(),
            "payload": record.payload_lossy(),
        }),
        Ok(lookup @ Lookup::Empty { offset }) => json!({
            "id": record_id,
            "status": lookup.status().as_str(),
            "code": lookup.status().code(),
            "offset": offset,
        }),
        Ok(lookup @ Lookup::NotFound) => json!({
            "id": record_id,
            "status": lookup.status().as_str(),
            "code": lookup.status().code(),
        }),
        Err(e) => json!({
            "id": record_id,
            "status": "error",
            "code": e.code().code(),
            "message": e.to_string(),
        }),
    }
}

/// Directory rendering with entries sorted by key
pub fn dump_report(index_path: &str, loaded: &LoadedIndex) -> Value {
    let entries: Vec<Value> = loaded
        .directory
        .sorted_entries()
        .iter()
        .map(|e| json!({ "key": e.key, "offset": e.offset }))
        .collect();

    json!({
        "path": index_path,
        "found": loaded.found,
        "entries": entries.len(),
        "directory": entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{IndexDirectory, IndexEntry};
    use crate::storage::{Record, StorageError};

    #[test]
    fn test_found_report() {
        let result = Ok(Lookup::Found(Record {
            record_id: 42,
            offset: 5,
            payload: b"HELLO".to_vec(),
        }));
        let report = lookup_report(42, &result);
        assert_eq!(report["status"], "found");
        assert_eq!(report["bytes_read"], 5);
        assert_eq!(report["payload"], "HELLO");
    }

    #[test]
    fn test_not_found_and_empty_reports_distinct() {
        let not_found = lookup_report(3, &Ok(Lookup::NotFound));
        let empty = lookup_report(3, &Ok(Lookup::Empty { offset: 99 }));

        assert_eq!(not_found["status"], "not_found");
        assert_eq!(not_found["code"], "SEEKDEX_RECORD_NOT_FOUND");
        assert_eq!(empty["status"], "empty");
        assert_eq!(empty["code"], "SEEKDEX_RECORD_EMPTY");
        assert_eq!(empty["offset"], 99);
    }

    #[test]
    fn test_error_report() {
        let report = lookup_report(9, &Err(StorageError::invalid_offset(9, -1)));
        assert_eq!(report["status"], "error");
        assert_eq!(report["code"], "SEEKDEX_INVALID_OFFSET");
    }

    #[test]
    fn test_dump_report_sorted() {
        let loaded = LoadedIndex {
            directory: IndexDirectory::from_entries([
                IndexEntry::new(3, 25),
                IndexEntry::new(1, 0),
            ]),
            found: true,
        };
        let report = dump_report("index.bin", &loaded);
        assert_eq!(report["entries"], 2);
        assert_eq!(report["directory"][0]["key"], 1);
        assert_eq!(report["directory"][1]["offset"], 25);
    }

    #[test]
    fn test_write_json_single_line() {
        let mut buf = Vec::new();
        write_json(&mut buf, &index_missing_report("index.bin")).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("SEEKDEX_INDEX_MISSING"));
    }
}

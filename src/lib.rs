//! seekdex - point lookup of records through a fixed-width binary index
//!
//! An index file of 12-byte big-endian `(i32 key, i64 offset)` entries is
//! loaded into an in-memory directory. Each lookup resolves a key to an
//! offset and reads a bounded span of bytes from a companion data file.
//!
//! ```no_run
//! use std::path::Path;
//! use seekdex::index::load_index;
//! use seekdex::storage::{locate, Lookup};
//!
//! let loaded = load_index(Path::new("index.bin"))?;
//! match locate(Path::new("data.bin"), &loaded.directory, 42)? {
//!     Lookup::Found(record) => println!("{}", record.payload_lossy()),
//!     Lookup::NotFound => println!("not in index"),
//!     Lookup::Empty { offset } => println!("nothing at {}", offset),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod index;
pub mod observability;
pub mod storage;

//! Configuration file
//!
//! ```json
//! { "index_path": "index.bin", "data_path": "data.bin",
//!   "max_record_len": 100, "log_level": "info" }
//! ```
//!
//! Every field is optional. Command line flags take precedence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::Severity;
use crate::storage::MAX_RECORD_LEN;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Index file (default "index.bin")
    #[serde(default = "default_index_path")]
    pub index_path: PathBuf,

    /// Data file (default "data.bin")
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Bytes read per record (default 100)
    #[serde(default = "default_max_record_len")]
    pub max_record_len: usize,

    /// Minimum log level (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_index_path() -> PathBuf {
    PathBuf::from("index.bin")
}
fn default_data_path() -> PathBuf {
    PathBuf::from("data.bin")
}
fn default_max_record_len() -> usize {
    MAX_RECORD_LEN
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_path: default_index_path(),
            data_path: default_data_path(),
            max_record_len: default_max_record_len(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// Values are not validated here; flags may still override them.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Loads `path` if given, otherwise returns defaults.
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Validate field values
    pub fn validate(&self) -> CliResult<()> {
        if self.max_record_len == 0 {
            return Err(CliError::config_error("max_record_len must be > 0"));
        }

        self.severity()?;

        Ok(())
    }

    /// Parsed minimum log level
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level.parse().map_err(CliError::config_error)
    }
}

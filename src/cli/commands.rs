//! CLI command implementations
//!
//! The index is loaded once per command. Lookups reuse the directory and
//! are independent of each other: one failing record never stops the rest.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::index::load_index;
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::storage::RecordLocator;

use super::args::{Command, CommonArgs, DEFAULT_RECORD_IDS};
use super::config::Config;
use super::errors::CliResult;
use super::io::{dump_report, index_missing_report, lookup_report, write_json};

/// Dispatch a parsed command, writing reports to stdout.
pub fn run_command(command: Command) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    match command {
        Command::Lookup {
            common,
            data,
            max_len,
            ids,
        } => {
            let config = prepare(&common, data, max_len)?;
            lookup(&config, &ids, &mut stdout)
        }
        Command::Dump { common } => {
            let config = prepare(&common, None, None)?;
            dump(&config, &mut stdout)
        }
    }
}

/// Resolves configuration, applies flag overrides and sets the log level.
fn prepare(
    common: &CommonArgs,
    data: Option<PathBuf>,
    max_len: Option<usize>,
) -> CliResult<Config> {
    let mut config = Config::resolve(common.config.as_deref())?;

    if let Some(index) = &common.index {
        config.index_path = index.clone();
    }
    if let Some(data) = data {
        config.data_path = data;
    }
    if let Some(max_len) = max_len {
        config.max_record_len = max_len;
    }
    if let Some(level) = &common.log_level {
        config.log_level = level.clone();
    }

    config.validate()?;
    Logger::set_min_severity(config.severity()?);

    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("data_path", &config.data_path.display().to_string()),
            ("index_path", &config.index_path.display().to_string()),
            ("max_record_len", &config.max_record_len.to_string()),
        ],
    );

    Ok(config)
}

/// Loads the index and reports each requested record.
///
/// With no ids, the default record numbers are used.
pub fn lookup<W: Write>(config: &Config, ids: &[i32], out: &mut W) -> CliResult<()> {
    let index_path = config.index_path.display().to_string();
    let loaded = load_index(&config.index_path)?;

    if !loaded.found {
        write_json(out, &index_missing_report(&index_path))?;
    }

    let ids: &[i32] = if ids.is_empty() {
        &DEFAULT_RECORD_IDS
    } else {
        ids
    };

    let locator = RecordLocator::new(&config.data_path, &loaded.directory)
        .with_max_len(config.max_record_len);

    for (id, result) in locator.locate_all(ids.iter().copied()) {
        write_json(out, &lookup_report(id, &result))?;
    }

    Ok(())
}

/// Loads the index and prints the directory.
pub fn dump<W: Write>(config: &Config, out: &mut W) -> CliResult<()> {
    let index_path = config.index_path.display().to_string();
    let loaded = load_index(&config.index_path)?;
    write_json(out, &dump_report(&index_path, &loaded))
}

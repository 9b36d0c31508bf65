//! CLI module for seekdex
//!
//! Provides command-line interface for:
//! - lookup: Read records by number through the index
//! - dump: Print the decoded index directory

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, CommonArgs, DEFAULT_RECORD_IDS};
pub use commands::{dump, lookup, run_command};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use io::{dump_report, index_missing_report, lookup_report, write_json};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

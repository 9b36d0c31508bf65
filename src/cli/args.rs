//! CLI argument definitions using clap
//!
//! Commands:
//! - seekdex lookup [--config <path>] [--index <path>] [--data <path>] [IDS...]
//! - seekdex dump [--config <path>] [--index <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Record numbers read when none are given on the command line
pub const DEFAULT_RECORD_IDS: [i32; 3] = [42, 3, 17];

/// seekdex - point lookup of records through a binary offset index
#[derive(Parser, Debug)]
#[command(name = "seekdex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Index file (overrides config)
    #[arg(long)]
    pub index: Option<PathBuf>,

    /// Minimum log level: trace, info, warn, error (overrides config)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up records by number and print their payloads
    Lookup {
        #[command(flatten)]
        common: CommonArgs,

        /// Data file (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Maximum bytes read per record (overrides config)
        #[arg(long)]
        max_len: Option<usize>,

        /// Record numbers to look up
        #[arg(allow_negative_numbers = true)]
        ids: Vec<i32>,
    },

    /// Print the decoded index directory
    Dump {
        #[command(flatten)]
        common: CommonArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup_with_ids() {
        let cli = Cli::try_parse_from([
            "seekdex", "lookup", "--index", "i.bin", "--data", "d.bin", "42", "-3",
        ])
        .unwrap();

        match cli.command {
            Command::Lookup { common, data, ids, max_len } => {
                assert_eq!(common.index, Some(PathBuf::from("i.bin")));
                assert_eq!(data, Some(PathBuf::from("d.bin")));
                assert_eq!(ids, vec![42, -3]);
                assert_eq!(max_len, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_dump() {
        let cli = Cli::try_parse_from(["seekdex", "dump", "--config", "c.json"]).unwrap();
        match cli.command {
            Command::Dump { common } => {
                assert_eq!(common.config, Some(PathBuf::from("c.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["seekdex", "lookup", "abc"]).is_err());
    }
}

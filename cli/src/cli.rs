//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::MemoryConfig;

/// Store and retrieve notes by semantic similarity.
///
/// Meant to be run as a subprocess: `retrieve` prints its results on stdout
/// joined by `||--CONTEXT-SEPARATOR--||`, diagnostics go to stderr.
///
/// Options go before the subcommand. Everything after it is taken literally,
/// so a note such as `-v` or `--help` is stored rather than parsed.
///
/// Exit status: usage errors (unknown subcommand, wrong argument count) and
/// startup failures exit 1. A failed `store` or `retrieve` exits 0 after
/// reporting on stderr, unless `--strict` is given.
#[derive(Debug, Parser)]
#[command(name = "personal-memory", version, about)]
pub struct Cli {
    /// Database directory.
    #[arg(long, value_name = "DIR")]
    pub db_path: Option<PathBuf>,

    /// Exit with status 1 when the operation fails.
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Embed TEXT and store it under DOC_ID.
    #[command(disable_help_flag = true)]
    Store {
        /// Text to store.
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Unique document id.
        #[arg(allow_hyphen_values = true)]
        doc_id: String,
    },

    /// Print the stored texts most similar to QUERY.
    #[command(disable_help_flag = true)]
    Retrieve {
        /// Query text.
        #[arg(allow_hyphen_values = true)]
        query: String,
    },
}

impl Cli {
    /// Build the configuration for this invocation.
    pub fn config(&self) -> MemoryConfig {
        let config = MemoryConfig::default().with_strict(self.strict);
        match &self.db_path {
            Some(path) => config.with_db_path(path),
            None => config,
        }
    }
}

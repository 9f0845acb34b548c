//! # Personal Memory CLI
//!
//! A command-line shim a host application runs as a subprocess to remember
//! and recall notes by meaning:
//!
//! ```text
//! personal-memory store "<text>" "<doc_id>"   # prints: Stored document with ID: <doc_id>
//! personal-memory retrieve "<query>"          # prints up to 3 texts joined by ||--CONTEXT-SEPARATOR--||
//! ```
//!
//! Text is embedded locally with all-MiniLM-L6-v2 and kept in the
//! `meeting_notes` collection of a database directory (`./memory_db` by
//! default). Stdout carries only the output contract; everything else goes
//! to stderr.

pub mod cli;
pub mod config;
pub mod error;
pub mod memory;
pub mod output;
pub mod runner;

pub use cli::{Cli, Command};
pub use config::MemoryConfig;
pub use error::{MemoryError, Result};
pub use memory::{MemoryService, Outcome, open_collection};
pub use output::{CONTEXT_SEPARATOR, join_context, split_context};
pub use runner::{ExitStatus, run};

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks warn, info or debug.
pub fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

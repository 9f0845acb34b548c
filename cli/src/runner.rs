//! Process lifecycle for one invocation.
//!
//! Opens the database, loads the embedding model, runs the command and maps
//! the result to an exit status. The model loader is passed in, so the whole
//! flow can run against a test provider.

use std::future::Future;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use memory_embeddings::EmbeddingProvider;
use tracing::debug;

use crate::cli::Command;
use crate::config::MemoryConfig;
use crate::memory::{MemoryService, Outcome, open_collection, report};

/// Exit status of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Exit 0.
    Success,
    /// Exit 1.
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::FAILURE,
        }
    }
}

impl Outcome {
    /// Exit status for this outcome. Failures only count under `strict`.
    pub fn exit_status(self, strict: bool) -> ExitStatus {
        match self {
            Outcome::Failed if strict => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}

/// Open the database first so a bad `--db-path` fails before the model
/// download.
async fn start<P, F, Fut>(
    config: &MemoryConfig,
    load_provider: F,
) -> anyhow::Result<MemoryService<P>>
where
    P: EmbeddingProvider,
    F: FnOnce() -> Fut,
    Fut: Future<Output = memory_embeddings::Result<P>>,
{
    let collection = open_collection(config, &config.model)
        .await
        .with_context(|| format!("Error opening memory database {}", config.db_path.display()))?;

    let provider = load_provider()
        .await
        .with_context(|| format!("Error loading embedding model {}", config.model))?;

    debug!("Loaded embedding model {}", provider.model());
    Ok(MemoryService::new(provider, collection).with_n_results(config.n_results))
}

/// Run `command` end to end.
///
/// Startup failures are reported on `err` and always exit 1; operation
/// failures exit 1 only when `config.strict` is set.
pub async fn run<P, F, Fut>(
    config: &MemoryConfig,
    command: &Command,
    load_provider: F,
    out: &mut impl Write,
    err: &mut impl Write,
) -> ExitStatus
where
    P: EmbeddingProvider,
    F: FnOnce() -> Fut,
    Fut: Future<Output = memory_embeddings::Result<P>>,
{
    let mut service = match start(config, load_provider).await {
        Ok(service) => service,
        Err(e) => {
            report(err, format_args!("{e:#}"));
            return ExitStatus::Failure;
        }
    };

    service
        .execute(command, out, err)
        .await
        .exit_status(config.strict)
}

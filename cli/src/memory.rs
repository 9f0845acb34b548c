//! Store and retrieve operations.

use std::io::Write;

use memory_embeddings::EmbeddingProvider;
use memory_store::{Collection, PersistentClient};
use tracing::{debug, info, warn};

use crate::cli::Command;
use crate::config::{DEFAULT_N_RESULTS, MemoryConfig};
use crate::error::Result;
use crate::output::{CONTEXT_SEPARATOR, join_context};

/// Embeds text with a provider and keeps it in one collection.
pub struct MemoryService<P> {
    provider: P,
    collection: Collection,
    n_results: usize,
}

/// How an operation ended, as far as the exit status is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation ran to completion.
    Completed,
    /// The operation failed and the failure was reported on stderr.
    Failed,
}

impl<P: EmbeddingProvider> MemoryService<P> {
    /// Wrap an already opened collection.
    pub fn new(provider: P, collection: Collection) -> Self {
        Self {
            provider,
            collection,
            n_results: DEFAULT_N_RESULTS,
        }
    }

    /// Open the configured database and collection, creating them if absent.
    pub async fn open(config: &MemoryConfig, provider: P) -> Result<Self> {
        let collection = open_collection(config, provider.model()).await?;
        Ok(Self::new(provider, collection).with_n_results(config.n_results))
    }

    /// Set how many documents `retrieve` returns.
    pub fn with_n_results(mut self, n_results: usize) -> Self {
        self.n_results = n_results;
        self
    }

    /// The underlying collection.
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Embed `text` and store it under `doc_id`.
    pub async fn store_text(&mut self, text: &str, doc_id: &str) -> Result<()> {
        if text.contains(CONTEXT_SEPARATOR) {
            warn!(
                "Document {doc_id} contains the context separator; \
                 retrieve output will split it"
            );
        }

        let response = self.provider.embed(text).await?;
        self.collection.add(doc_id, text, response.embedding).await?;

        info!("Stored document {doc_id} in {}", self.collection.name());
        Ok(())
    }

    /// Return the texts of the stored documents most similar to `query`,
    /// best first.
    pub async fn retrieve_context(&self, query: &str) -> Result<Vec<String>> {
        let response = self.provider.embed(query).await?;
        let matches = self.collection.query(&response.embedding, self.n_results)?;

        for m in &matches {
            debug!("Match {} (score {:.4})", m.id, m.score);
        }

        Ok(matches.into_iter().map(|m| m.document).collect())
    }

    /// Run one command, writing the caller-facing output to `out` and
    /// diagnostics to `err`.
    ///
    /// Failures are reported, never propagated.
    pub async fn execute(
        &mut self,
        command: &Command,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Outcome {
        let written = match command {
            Command::Store { text, doc_id } => match self.store_text(text, doc_id).await {
                Ok(()) => writeln!(out, "Stored document with ID: {doc_id}"),
                Err(e) => {
                    report(err, format_args!("Error storing document: {e}"));
                    return Outcome::Failed;
                }
            },
            Command::Retrieve { query } => match self.retrieve_context(query).await {
                Ok(documents) => writeln!(out, "{}", join_context(&documents)),
                Err(e) => {
                    report(err, format_args!("Error retrieving context: {e}"));
                    return Outcome::Failed;
                }
            },
        };

        match written.and_then(|()| out.flush()) {
            Ok(()) => Outcome::Completed,
            Err(e) => {
                report(err, format_args!("Error writing output: {e}"));
                Outcome::Failed
            }
        }
    }
}

/// Open the configured collection, recording `model` when it is created.
pub async fn open_collection(config: &MemoryConfig, model: &str) -> Result<Collection> {
    let client = PersistentClient::open(&config.db_path).await?;
    Ok(client.get_or_create_collection(&config.collection, model).await?)
}

pub(crate) fn report(err: &mut impl Write, message: std::fmt::Arguments<'_>) {
    if let Err(e) = writeln!(err, "{message}") {
        warn!("Could not write to stderr: {e}");
    }
}

//! Configuration for the memory tool.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default database directory, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "./memory_db";

/// Collection all documents are stored in.
pub const DEFAULT_COLLECTION: &str = "meeting_notes";

/// Number of documents `retrieve` returns.
pub const DEFAULT_N_RESULTS: usize = 3;

/// Configuration for a single invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Database directory.
    pub db_path: PathBuf,

    /// Collection name.
    pub collection: String,

    /// Embedding model name.
    pub model: String,

    /// Where downloaded model files are cached.
    pub model_cache_dir: PathBuf,

    /// Maximum number of documents returned by `retrieve`.
    pub n_results: usize,

    /// Exit non-zero when a store or retrieve operation fails.
    pub strict: bool,
}

impl MemoryConfig {
    /// Set the database directory.
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    /// Set the number of results returned by `retrieve`.
    pub fn with_n_results(mut self, n_results: usize) -> Self {
        self.n_results = n_results;
        self
    }

    /// Make operation failures change the exit status.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            collection: DEFAULT_COLLECTION.to_string(),
            model: memory_embeddings::DEFAULT_MODEL.to_string(),
            model_cache_dir: dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("personal-memory/models"),
            n_results: DEFAULT_N_RESULTS,
            strict: false,
        }
    }
}

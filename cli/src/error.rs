//! Error types for memory operations.

use thiserror::Error;

/// Result type alias for memory operations.
pub type Result<T> = std::result::Result<T, MemoryError>;

/// Errors raised by a store or retrieve operation.
#[derive(Error, Debug)]
pub enum MemoryError {
    /// Embedding generation failed.
    #[error(transparent)]
    Embedding(#[from] memory_embeddings::EmbeddingError),

    /// The collection rejected the request or could not be persisted.
    #[error(transparent)]
    Store(#[from] memory_store::StoreError),
}

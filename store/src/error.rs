//! Error types for the document store.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in the document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A document with this id is already stored.
    #[error("document id already exists: {0}")]
    DuplicateId(String),

    /// Collection names become file names, so they are restricted.
    #[error("invalid collection name: {0:?}")]
    InvalidName(String),

    /// Embedding does not match the collection's dimension.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Collection file exists but its contents are inconsistent.
    #[error("corrupt collection {name}: {reason}")]
    Corrupt { name: String, reason: String },

    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Similarity index error.
    #[error("index error: {0}")]
    Index(#[from] memory_embeddings::EmbeddingError),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to create storage directory.
    #[error("failed to create directory: {0}")]
    CreateDirectory(String),

    /// Failed to read collection file.
    #[error("failed to read file: {0}")]
    ReadFile(String),

    /// Failed to write collection file.
    #[error("failed to write file: {0}")]
    WriteFile(String),
}

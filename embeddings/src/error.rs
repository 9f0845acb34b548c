//! Error types for the embeddings system.

use thiserror::Error;

/// Result type alias for embedding operations.
pub type Result<T> = std::result::Result<T, EmbeddingError>;

/// Errors that can occur in the embeddings system.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// The requested model is not one this crate knows how to load.
    #[error("unsupported embedding model: {0}")]
    UnsupportedModel(String),

    /// The model could not be downloaded or initialized.
    #[error("failed to load embedding model: {0}")]
    ModelInit(String),

    /// Inference failed while embedding text.
    #[error("embedding inference failed: {0}")]
    Inference(String),

    /// Invalid response from provider.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Dimension mismatch.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

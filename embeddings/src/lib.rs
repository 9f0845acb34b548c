//! # Embeddings
//!
//! Sentence embeddings and similarity search for personal memory.
//!
//! ## Features
//!
//! - **Embedding Generation**: Convert text to dense vectors with a local model
//! - **Similarity Search**: Rank stored vectors against a query by cosine similarity
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Embeddings System                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  EmbeddingProvider ──► Embedding ──► SimilarityIndex           │
//! │       │                                   │                     │
//! │       ▼                                   ▼                     │
//! │  LocalProvider (ONNX)             cosine top-k search           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod index;
pub mod provider;
pub mod similarity;

pub use error::{EmbeddingError, Result};
pub use index::SimilarityIndex;
pub use provider::{EmbeddingProvider, EmbeddingResponse, LocalModel, LocalProvider};
pub use similarity::{SimilarityResult, cosine_similarity};

/// A dense vector embedding.
pub type Embedding = Vec<f32>;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "all-MiniLM-L6-v2";

//! Embedding providers.
//!
//! The only production provider runs a sentence-transformers model locally
//! through the ONNX runtime; nothing leaves the machine.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{DEFAULT_MODEL, Embedding};
use crate::error::{EmbeddingError, Result};

/// Response from embedding generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// The generated embedding.
    pub embedding: Embedding,

    /// Model used to generate the embedding.
    pub model: String,

    /// Dimension of the embedding.
    pub dimension: usize,
}

impl EmbeddingResponse {
    /// Build a response, deriving the dimension from the vector.
    pub fn new(embedding: Embedding, model: impl Into<String>) -> Self {
        let dimension = embedding.len();
        Self {
            embedding,
            model: model.into(),
            dimension,
        }
    }
}

/// Trait for embedding providers.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get the model this provider embeds with.
    fn model(&self) -> &str;

    /// Generate an embedding for the given text.
    async fn embed(&self, text: &str) -> Result<EmbeddingResponse>;
}

/// A local model this crate can load, with its output dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalModel {
    /// Short model name, as the sentence-transformers hub names it.
    pub name: &'static str,

    /// Output dimension.
    pub dimension: usize,
}

impl LocalModel {
    /// sentence-transformers/all-MiniLM-L6-v2.
    pub const ALL_MINILM_L6_V2: LocalModel = LocalModel {
        name: DEFAULT_MODEL,
        dimension: 384,
    };

    /// Look up a model by name.
    ///
    /// Accepts both the short name and the hub-qualified form, e.g.
    /// `sentence-transformers/all-MiniLM-L6-v2`.
    pub fn resolve(name: &str) -> Result<Self> {
        let short = name.rsplit('/').next().unwrap_or(name);
        if short.eq_ignore_ascii_case(Self::ALL_MINILM_L6_V2.name) {
            Ok(Self::ALL_MINILM_L6_V2)
        } else {
            Err(EmbeddingError::UnsupportedModel(name.to_string()))
        }
    }
}

/// Sentence-embedding provider backed by a local ONNX model.
pub struct LocalProvider {
    model: Arc<Mutex<TextEmbedding>>,
    info: LocalModel,
}

impl LocalProvider {
    /// Load the named model, downloading it into `cache_dir` on first use.
    ///
    /// Loading blocks on disk and network I/O, so it runs on the blocking
    /// pool.
    pub async fn load(model: &str, cache_dir: impl AsRef<Path>) -> Result<Self> {
        let info = LocalModel::resolve(model)?;
        let cache_dir: PathBuf = cache_dir.as_ref().to_path_buf();

        info!(
            "Loading embedding model {} (cache: {})",
            info.name,
            cache_dir.display()
        );

        let model = tokio::task::spawn_blocking(move || {
            TextEmbedding::try_new(
                InitOptions::new(EmbeddingModel::AllMiniLML6V2)
                    .with_cache_dir(cache_dir)
                    .with_show_download_progress(false),
            )
            .map_err(|e| EmbeddingError::ModelInit(e.to_string()))
        })
        .await
        .map_err(|e| EmbeddingError::ModelInit(format!("loader task failed: {e}")))??;

        Ok(Self {
            model: Arc::new(Mutex::new(model)),
            info,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for LocalProvider {
    fn model(&self) -> &str {
        self.info.name
    }

    async fn embed(&self, text: &str) -> Result<EmbeddingResponse> {
        debug!("Generating embedding with model: {}", self.info.name);

        let model = Arc::clone(&self.model);
        let texts = vec![text.to_string()];

        let embeddings = tokio::task::spawn_blocking(move || {
            let model = model
                .lock()
                .map_err(|_| EmbeddingError::Inference("embedding model lock poisoned".into()))?;
            model
                .embed(texts, None)
                .map_err(|e| EmbeddingError::Inference(e.to_string()))
        })
        .await
        .map_err(|e| EmbeddingError::Inference(format!("embedding task failed: {e}")))??;

        let embedding = embeddings
            .into_iter()
            .next()
            .ok_or_else(|| EmbeddingError::InvalidResponse("No embedding in response".into()))?;

        if embedding.len() != self.info.dimension {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.info.dimension,
                actual: embedding.len(),
            });
        }

        Ok(EmbeddingResponse::new(embedding, self.info.name))
    }
}

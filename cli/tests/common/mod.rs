//! Test embedding providers that need no model download.

#![allow(dead_code)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use memory_embeddings::{EmbeddingError, EmbeddingProvider, EmbeddingResponse, Result};

/// Bag-of-words embedding: each lowercased word increments one hashed bucket.
///
/// Texts that share words score higher, which is enough to exercise ranking.
pub struct HashingProvider {
    dimension: usize,
}

impl HashingProvider {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Default for HashingProvider {
    fn default() -> Self {
        Self::new(256)
    }
}

#[async_trait]
impl EmbeddingProvider for HashingProvider {
    fn model(&self) -> &str {
        "hashing-bow"
    }

    async fn embed(&self, text: &str) -> Result<EmbeddingResponse> {
        let mut embedding = vec![0.0f32; self.dimension];
        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let mut hasher = DefaultHasher::new();
            word.to_lowercase().hash(&mut hasher);
            let bucket = (hasher.finish() % self.dimension as u64) as usize;
            embedding[bucket] += 1.0;
        }
        Ok(EmbeddingResponse::new(embedding, self.model()))
    }
}

/// Provider whose every call fails, as a broken model would.
pub struct FailingProvider;

#[async_trait]
impl EmbeddingProvider for FailingProvider {
    fn model(&self) -> &str {
        "failing-model"
    }

    async fn embed(&self, _text: &str) -> Result<EmbeddingResponse> {
        Err(EmbeddingError::Inference("model unavailable".to_string()))
    }
}

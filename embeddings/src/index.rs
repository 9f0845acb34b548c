//! Similarity index for fast embedding lookups.

use indexmap::IndexMap;
use tracing::debug;

use crate::Embedding;
use crate::error::{EmbeddingError, Result};
use crate::similarity::{SimilarityResult, find_top_k, normalize};

/// A similarity index over embeddings keyed by id.
///
/// The dimension is fixed either up front or by the first embedding added.
/// Entries are kept in insertion order, which is also the tie-break order
/// for equal scores in [`SimilarityIndex::search`].
#[derive(Debug, Default)]
pub struct SimilarityIndex {
    /// Stored embeddings (normalized).
    entries: IndexMap<String, Embedding>,

    /// Expected dimension of embeddings, once known.
    dimension: Option<usize>,
}

impl SimilarityIndex {
    /// Create an empty index whose dimension is set by the first insert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with a fixed dimension.
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            dimension: Some(dimension),
        }
    }

    /// The dimension of the index, if any embedding has fixed it.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    fn check_dimension(&self, actual: usize) -> Result<()> {
        match self.dimension {
            Some(expected) if expected != actual => {
                Err(EmbeddingError::DimensionMismatch { expected, actual })
            }
            _ => Ok(()),
        }
    }

    /// Add an embedding to the index, replacing any entry with the same id.
    pub fn add(&mut self, id: impl Into<String>, mut embedding: Embedding) -> Result<()> {
        let id = id.into();

        if embedding.is_empty() {
            return Err(EmbeddingError::InvalidResponse(format!("empty embedding for {id}")));
        }
        self.check_dimension(embedding.len())?;
        self.dimension.get_or_insert(embedding.len());

        normalize(&mut embedding);
        debug!("Added embedding to index: {id}");
        self.entries.insert(id, embedding);

        Ok(())
    }

    /// Remove an embedding from the index, preserving the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<Embedding> {
        self.entries.shift_remove(id)
    }

    /// Check if an ID exists in the index.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Get the number of entries in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Search for the `k` most similar embeddings, best first.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SimilarityResult>> {
        if self.entries.is_empty() {
            return Ok(Vec::new());
        }
        self.check_dimension(query.len())?;

        let mut query = query.to_vec();
        normalize(&mut query);

        find_top_k(
            &query,
            self.entries
                .iter()
                .map(|(id, embedding)| (id.as_str(), embedding.as_slice())),
            k,
        )
    }
}

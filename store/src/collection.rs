//! A named, persistent collection of documents and their embeddings.
//!
//! Each collection lives in a single JSON file. Every mutation rewrites the
//! file through a temp file and a rename, so a crash leaves either the old
//! or the new contents on disk, never a mix.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use memory_embeddings::{Embedding, SimilarityIndex};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::document::{QueryMatch, StoredDocument};
use crate::error::{Result, StorageError, StoreError};

/// On-disk representation of a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CollectionRecord {
    name: String,
    model: String,
    dimension: Option<usize>,
    created_at: DateTime<Utc>,
    documents: Vec<StoredDocument>,
}

/// A collection of documents searchable by embedding similarity.
pub struct Collection {
    /// Backing file.
    path: PathBuf,

    record: CollectionRecord,

    /// Normalized embeddings, in the same order as `record.documents`.
    index: SimilarityIndex,

    /// Document id to position in `record.documents`.
    positions: HashMap<String, usize>,
}

impl Collection {
    /// Create a new empty collection and write it to `path`.
    pub(crate) async fn create(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let collection = Self {
            path: path.into(),
            record: CollectionRecord {
                name: name.into(),
                model: model.into(),
                dimension: None,
                created_at: Utc::now(),
                documents: Vec::new(),
            },
            index: SimilarityIndex::new(),
            positions: HashMap::new(),
        };

        collection.save().await?;
        info!("Created collection {}", collection.record.name);
        Ok(collection)
    }

    /// Load a collection from `path`, rebuilding its similarity index.
    pub(crate) async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| StorageError::ReadFile(format!("{}: {e}", path.display())))?;
        let record: CollectionRecord = serde_json::from_str(&content)?;

        let corrupt = |reason: String| StoreError::Corrupt {
            name: record.name.clone(),
            reason,
        };

        let mut index = match record.dimension {
            Some(dimension) => SimilarityIndex::with_dimension(dimension),
            None if record.documents.is_empty() => SimilarityIndex::new(),
            None => return Err(corrupt("documents present but no dimension".to_string())),
        };
        let mut positions = HashMap::with_capacity(record.documents.len());

        for (position, doc) in record.documents.iter().enumerate() {
            if positions.insert(doc.id.clone(), position).is_some() {
                return Err(corrupt(format!("duplicate id {}", doc.id)));
            }
            index
                .add(doc.id.clone(), doc.embedding.clone())
                .map_err(|e| corrupt(format!("document {}: {e}", doc.id)))?;
        }

        debug!(
            "Loaded collection {} with {} documents",
            record.name,
            record.documents.len()
        );

        Ok(Self {
            path,
            record,
            index,
            positions,
        })
    }

    /// Name of the collection.
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Model the collection's embeddings were produced with.
    pub fn model(&self) -> &str {
        &self.record.model
    }

    /// Embedding dimension, fixed by the first document added.
    pub fn dimension(&self) -> Option<usize> {
        self.record.dimension
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.record.documents.len()
    }

    /// Whether the collection holds no documents.
    pub fn is_empty(&self) -> bool {
        self.record.documents.is_empty()
    }

    /// Get a document by id.
    pub fn get(&self, id: &str) -> Option<&StoredDocument> {
        self.positions
            .get(id)
            .and_then(|&position| self.record.documents.get(position))
    }

    /// All documents in insertion order.
    pub fn documents(&self) -> impl Iterator<Item = &StoredDocument> {
        self.record.documents.iter()
    }

    /// Add a document and persist the collection.
    ///
    /// Fails without touching memory or disk if the id is already present or
    /// the embedding has the wrong dimension. If the write fails the
    /// in-memory state is rolled back as well.
    pub async fn add(
        &mut self,
        id: impl Into<String>,
        document: impl Into<String>,
        embedding: Embedding,
    ) -> Result<()> {
        let id = id.into();

        if self.positions.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        match self.record.dimension {
            Some(expected) if expected != embedding.len() => {
                return Err(StoreError::DimensionMismatch {
                    expected,
                    actual: embedding.len(),
                });
            }
            _ => {}
        }

        self.index.add(id.clone(), embedding.clone())?;

        let previous_dimension = self.record.dimension;
        self.record.dimension = Some(embedding.len());
        self.positions.insert(id.clone(), self.record.documents.len());
        self.record
            .documents
            .push(StoredDocument::new(id.clone(), document, embedding));

        if let Err(e) = self.save().await {
            warn!("Rolling back add of {id}: {e}");
            self.record.documents.pop();
            self.positions.remove(&id);
            self.index.remove(&id);
            self.record.dimension = previous_dimension;
            return Err(e);
        }

        debug!("Added document {id} to {}", self.record.name);
        Ok(())
    }

    /// Return up to `n` documents most similar to `embedding`, best first.
    pub fn query(&self, embedding: &[f32], n: usize) -> Result<Vec<QueryMatch>> {
        let results = self.index.search(embedding, n)?;

        results
            .into_iter()
            .map(|result| {
                let doc = self.get(&result.id).ok_or_else(|| StoreError::Corrupt {
                    name: self.record.name.clone(),
                    reason: format!("index refers to missing document {}", result.id),
                })?;
                Ok(QueryMatch {
                    id: result.id,
                    document: doc.document.clone(),
                    score: result.score,
                })
            })
            .collect()
    }

    /// Write the collection atomically.
    async fn save(&self) -> Result<()> {
        let content = serde_json::to_string(&self.record)?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content)
            .await
            .map_err(|e| StorageError::WriteFile(format!("{}: {e}", temp_path.display())))?;

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StorageError::WriteFile(format!("{}: {e}", self.path.display())))?;

        debug!("Saved collection {}", self.record.name);
        Ok(())
    }
}

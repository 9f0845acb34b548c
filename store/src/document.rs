//! Stored documents and query matches.

use chrono::{DateTime, Utc};
use memory_embeddings::Embedding;
use serde::{Deserialize, Serialize};

/// A document as persisted in a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Caller-chosen unique identifier.
    pub id: String,

    /// The source text.
    pub document: String,

    /// Embedding of `document`, as produced by the model.
    pub embedding: Embedding,

    /// When the document was added.
    pub added_at: DateTime<Utc>,
}

impl StoredDocument {
    /// Create a document stamped with the current time.
    pub fn new(id: impl Into<String>, document: impl Into<String>, embedding: Embedding) -> Self {
        Self {
            id: id.into(),
            document: document.into(),
            embedding,
            added_at: Utc::now(),
        }
    }
}

/// One result of a similarity query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryMatch {
    /// Id of the matched document.
    pub id: String,

    /// Text of the matched document.
    pub document: String,

    /// Cosine similarity to the query.
    pub score: f32,
}

//! # Memory Store
//!
//! A small local vector database. A [`PersistentClient`] owns a directory;
//! each [`Collection`] in it is a JSON file of documents, their embeddings,
//! and enough metadata to rebuild the similarity index on load.
//!
//! ```rust,ignore
//! use memory_store::PersistentClient;
//!
//! let client = PersistentClient::open("./memory_db").await?;
//! let mut notes = client.get_or_create_collection("meeting_notes", "all-MiniLM-L6-v2").await?;
//! notes.add("standup-1", "Ship the beta on Friday", embedding).await?;
//! let top = notes.query(&query_embedding, 3)?;
//! ```

pub mod client;
pub mod collection;
pub mod document;
pub mod error;

pub use client::PersistentClient;
pub use collection::Collection;
pub use document::{QueryMatch, StoredDocument};
pub use error::{Result, StorageError, StoreError};

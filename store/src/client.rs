//! Directory-based database holding named collections.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{info, warn};

use crate::collection::Collection;
use crate::error::{Result, StorageError, StoreError};

/// A database rooted at a directory, one JSON file per collection.
pub struct PersistentClient {
    root: PathBuf,
}

impl PersistentClient {
    /// Open the database at `root`, creating the directory if needed.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(&root)
            .await
            .map_err(|e| StorageError::CreateDirectory(format!("{}: {e}", root.display())))?;

        Ok(Self { root })
    }

    /// Root directory of the database.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    /// Open the named collection, creating it if it does not exist.
    ///
    /// `model` is recorded on creation. Opening an existing collection that
    /// was built with a different model only logs a warning; mismatched
    /// embeddings are caught by the dimension check on add and query.
    pub async fn get_or_create_collection(&self, name: &str, model: &str) -> Result<Collection> {
        validate_name(name)?;
        let path = self.collection_path(name);

        if fs::try_exists(&path)
            .await
            .map_err(|e| StorageError::ReadFile(format!("{}: {e}", path.display())))?
        {
            let collection = Collection::load(path).await?;
            if collection.model() != model {
                warn!(
                    "Collection {name} was built with model {}, now using {model}",
                    collection.model()
                );
            }
            info!("Opened collection {name} ({} documents)", collection.len());
            return Ok(collection);
        }

        Collection::create(path, name, model).await
    }
}

fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name.len() <= 63
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("nested/memory_db");

        let client = PersistentClient::open(&root).await.unwrap();
        assert!(root.is_dir());
        assert_eq!(client.root(), root.as_path());
    }

    #[tokio::test]
    async fn test_get_or_create_reuses_existing() {
        let temp_dir = TempDir::new().unwrap();
        let client = PersistentClient::open(temp_dir.path()).await.unwrap();

        let mut first = client
            .get_or_create_collection("meeting_notes", "m")
            .await
            .unwrap();
        first.add("id-1", "hello", vec![1.0, 0.0]).await.unwrap();

        let second = client
            .get_or_create_collection("meeting_notes", "m")
            .await
            .unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second.get("id-1").unwrap().document, "hello");
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("meeting_notes").is_ok());
        assert!(validate_name("notes-2024").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("../escape").is_err());
        assert!(validate_name("with space").is_err());
    }
}

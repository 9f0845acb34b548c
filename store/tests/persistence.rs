//! Collections persist across independently opened clients, the way
//! separate process invocations see them.

use memory_store::{PersistentClient, StoreError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[tokio::test]
async fn test_collection_outlives_client() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("memory_db");

    {
        let client = PersistentClient::open(&root).await.unwrap();
        let mut notes = client
            .get_or_create_collection("meeting_notes", "all-MiniLM-L6-v2")
            .await
            .unwrap();
        notes.add("a", "alpha", vec![1.0, 0.0, 0.0]).await.unwrap();
        notes.add("b", "beta", vec![0.0, 1.0, 0.0]).await.unwrap();
    }

    {
        let client = PersistentClient::open(&root).await.unwrap();
        let mut notes = client
            .get_or_create_collection("meeting_notes", "all-MiniLM-L6-v2")
            .await
            .unwrap();
        notes.add("c", "gamma", vec![0.0, 0.0, 1.0]).await.unwrap();
    }

    let client = PersistentClient::open(&root).await.unwrap();
    let notes = client
        .get_or_create_collection("meeting_notes", "all-MiniLM-L6-v2")
        .await
        .unwrap();

    let ids: Vec<&str> = notes.documents().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(notes.dimension(), Some(3));

    let top = notes.query(&[0.1, 0.9, 0.0], 1).unwrap();
    assert_eq!(top[0].document, "beta");
}

#[tokio::test]
async fn test_collections_are_independent() {
    let temp_dir = TempDir::new().unwrap();
    let client = PersistentClient::open(temp_dir.path()).await.unwrap();

    let mut notes = client
        .get_or_create_collection("meeting_notes", "m")
        .await
        .unwrap();
    notes.add("a", "alpha", vec![1.0]).await.unwrap();

    let other = client.get_or_create_collection("journal", "m").await.unwrap();
    assert!(other.is_empty());
    assert!(temp_dir.path().join("journal.json").exists());
    assert!(temp_dir.path().join("meeting_notes.json").exists());
}

#[tokio::test]
async fn test_unreadable_collection_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("meeting_notes.json"), "not json").unwrap();

    let client = PersistentClient::open(temp_dir.path()).await.unwrap();
    let err = client
        .get_or_create_collection("meeting_notes", "m")
        .await
        .err()
        .unwrap();
    assert!(matches!(err, StoreError::Serialization(_)));
}

#[tokio::test]
async fn test_invalid_collection_name() {
    let temp_dir = TempDir::new().unwrap();
    let client = PersistentClient::open(temp_dir.path()).await.unwrap();

    let err = client
        .get_or_create_collection("../outside", "m")
        .await
        .err()
        .unwrap();
    assert!(matches!(err, StoreError::InvalidName(_)));
}

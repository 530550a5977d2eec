use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use hl_core::{Article, BookmarkStore, Error, Result};
use tokio::sync::Mutex;
use tracing::warn;

/// The single key the bookmark collection lives under.
const STORE_KEY: &str = "bookmark";

/// File-backed bookmark store: one JSON document holding the collection
/// under the fixed `"bookmark"` key.
///
/// Every mutation is a full read-modify-write of the document, executed
/// under the store's mutex so that concurrent add/remove calls cannot lose
/// each other's update. A failed write leaves no partial in-memory state,
/// so mutations are safe to retry. This only holds up because a personal
/// bookmark list stays small; callers must not assume it scales.
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    Error::Storage(format!("Failed to create storage directory: {}", e))
                })?;
            }
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Reads the persisted document. A missing file is an empty
    /// collection; a corrupt one is discarded with a warning rather than
    /// treated as fatal.
    async fn read_entries(&self) -> Result<Vec<Article>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        let mut document: HashMap<String, Vec<Article>> = match serde_json::from_slice(&bytes) {
            Ok(document) => document,
            Err(e) => {
                warn!(
                    "Discarding corrupt bookmark document at {}: {}",
                    self.path.display(),
                    e
                );
                return Ok(Vec::new());
            }
        };
        Ok(document.remove(STORE_KEY).unwrap_or_default())
    }

    async fn write_entries(&self, entries: &[Article]) -> Result<()> {
        let mut document = HashMap::new();
        document.insert(STORE_KEY, entries);
        let bytes = serde_json::to_vec(&document)?;
        tokio::fs::write(&self.path, bytes).await.map_err(|e| {
            Error::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl BookmarkStore for FileStorage {
    async fn list(&self) -> Result<Vec<Article>> {
        let _guard = self.lock.lock().await;
        self.read_entries().await
    }

    async fn add(&self, article: &Article) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.iter().any(|a| a.id == article.id) {
            return Ok(());
        }
        entries.push(article.clone());
        self.write_entries(&entries).await
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.retain(|a| a.id != id);
        self.write_entries(&entries).await
    }

    async fn contains(&self, id: &str) -> Result<bool> {
        let _guard = self.lock.lock().await;
        Ok(self.read_entries().await?.iter().any(|a| a.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn article(id: &str) -> Article {
        Article {
            id: id.to_string(),
            title: Some("Test Article".to_string()),
            description: Some("A test description".to_string()),
            content: None,
            image_url: None,
            link: Some("http://test.com".to_string()),
            source_name: "test".to_string(),
            published_at: Some("2024-01-01T10:00:00Z".to_string()),
            category: "general".to_string(),
        }
    }

    #[tokio::test]
    async fn add_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");

        let storage = FileStorage::new(&path).await.unwrap();
        storage.add(&article("a-1")).await.unwrap();
        drop(storage);

        let reopened = FileStorage::new(&path).await.unwrap();
        assert!(reopened.contains("a-1").await.unwrap());
        assert_eq!(reopened.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn add_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("bookmarks.json"))
            .await
            .unwrap();
        storage.add(&article("a-1")).await.unwrap();
        storage.add(&article("a-1")).await.unwrap();
        assert_eq!(storage.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn remove_persists_an_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        let storage = FileStorage::new(&path).await.unwrap();
        storage.add(&article("a-1")).await.unwrap();
        storage.remove("a-1").await.unwrap();
        assert!(!storage.contains("a-1").await.unwrap());

        let reopened = FileStorage::new(&path).await.unwrap();
        assert!(reopened.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_document_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        tokio::fs::write(&path, b"not json at all").await.unwrap();

        let storage = FileStorage::new(&path).await.unwrap();
        assert!(storage.list().await.unwrap().is_empty());

        // The store stays usable after discarding the corrupt document.
        storage.add(&article("a-1")).await.unwrap();
        assert!(storage.contains("a-1").await.unwrap());
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("bookmarks.json"))
            .await
            .unwrap();
        assert!(storage.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_adds_lose_no_updates() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(
            FileStorage::new(dir.path().join("bookmarks.json"))
                .await
                .unwrap(),
        );

        let mut handles = Vec::new();
        for i in 0..10 {
            let storage = storage.clone();
            handles.push(tokio::spawn(async move {
                storage.add(&article(&format!("a-{}", i))).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(storage.list().await.unwrap().len(), 10);
    }
}

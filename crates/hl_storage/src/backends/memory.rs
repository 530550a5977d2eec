use async_trait::async_trait;
use hl_core::{Article, BookmarkStore, Result};
use tokio::sync::Mutex;

/// In-memory bookmark store for tests and ephemeral sessions. The mutex
/// serializes mutations the same way the file backend does.
pub struct MemoryStorage {
    entries: Mutex<Vec<Article>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookmarkStore for MemoryStorage {
    async fn list(&self) -> Result<Vec<Article>> {
        Ok(self.entries.lock().await.clone())
    }

    async fn add(&self, article: &Article) -> Result<()> {
        let mut entries = self.entries.lock().await;
        if entries.iter().any(|a| a.id == article.id) {
            return Ok(());
        }
        entries.push(article.clone());
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.retain(|a| a.id != id);
        Ok(())
    }

    async fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.entries.lock().await.iter().any(|a| a.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str) -> Article {
        Article {
            id: id.to_string(),
            title: Some("Test Article".to_string()),
            description: None,
            content: None,
            image_url: None,
            link: Some("http://test.com".to_string()),
            source_name: "test".to_string(),
            published_at: Some("2024-01-01T10:00:00Z".to_string()),
            category: String::new(),
        }
    }

    #[tokio::test]
    async fn add_is_idempotent() {
        let storage = MemoryStorage::new();
        storage.add(&article("a-1")).await.unwrap();
        storage.add(&article("a-1")).await.unwrap();
        assert_eq!(storage.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn remove_clears_entry() {
        let storage = MemoryStorage::new();
        storage.add(&article("a-1")).await.unwrap();
        storage.add(&article("a-2")).await.unwrap();
        storage.remove("a-1").await.unwrap();
        assert!(!storage.contains("a-1").await.unwrap());
        assert!(storage.contains("a-2").await.unwrap());
        let remaining = storage.list().await.unwrap();
        assert!(remaining.iter().all(|a| a.id != "a-1"));
    }

    #[tokio::test]
    async fn remove_of_absent_id_is_a_noop() {
        let storage = MemoryStorage::new();
        storage.remove("missing").await.unwrap();
        assert!(storage.list().await.unwrap().is_empty());
    }
}

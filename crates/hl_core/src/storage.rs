use async_trait::async_trait;

use crate::types::Article;
use crate::Result;

/// A persisted, unordered collection of bookmarked article snapshots.
///
/// Entries are keyed by `Article::id`; no two stored entries share one.
/// Implementations must serialize mutations internally so that two
/// concurrent add/remove calls cannot lose each other's update.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Returns every stored bookmark. Missing or corrupt backing data
    /// yields an empty list, not an error.
    async fn list(&self) -> Result<Vec<Article>>;

    /// Stores a full article snapshot. No-op when an entry with the same
    /// id already exists.
    async fn add(&self, article: &Article) -> Result<()>;

    /// Removes any entry with the given id. No-op when absent.
    async fn remove(&self, id: &str) -> Result<()>;

    /// Whether an entry with the given id is currently stored.
    async fn contains(&self, id: &str) -> Result<bool>;
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hl_core::{BookmarkStore, Error, Result};

pub mod backends;

pub use backends::*;

/// Default location of the file-backed store, relative to the working
/// directory.
pub const DEFAULT_STORE_PATH: &str = "bookmarks.json";

/// Creates a bookmark store by backend name, as selected on the command
/// line. `path` only applies to the file backend.
pub async fn create_store(kind: &str, path: Option<&Path>) -> Result<Arc<dyn BookmarkStore>> {
    match kind {
        "memory" => Ok(Arc::new(MemoryStorage::new())),
        "file" => {
            let path = path
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));
            Ok(Arc::new(FileStorage::new(path).await?))
        }
        other => Err(Error::Storage(format!("Unknown storage backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use hl_core::BookmarkStore;
}

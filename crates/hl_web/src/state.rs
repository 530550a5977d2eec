use std::sync::Arc;

use hl_core::BookmarkStore;
use hl_feed::NewsClient;

pub struct AppState {
    pub client: NewsClient,
    pub bookmarks: Arc<dyn BookmarkStore>,
}

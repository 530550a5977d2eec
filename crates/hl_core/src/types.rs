use serde::{Deserialize, Serialize};

/// One normalized news article as the rest of the system sees it.
///
/// Articles are rebuilt from the upstream feed on every fetch and never
/// mutated in place. `published_at` keeps the upstream's raw timestamp
/// string because the identifier is derived from its exact bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub source_name: String,
    pub published_at: Option<String>,
    pub category: String,
}

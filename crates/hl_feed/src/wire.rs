//! The upstream wire schema and the ingress mapping into [`Article`].
//!
//! Every field the feed may omit is optional here; the payload is
//! deserialized into this schema before anything downstream touches it.
//! Identifier assignment happens in [`map_articles`] and nowhere else.

use hl_core::{identity, Article, Error, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinesResponse {
    pub status: String,
    #[serde(default)]
    pub total_results: Option<u32>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub source: Option<RawSource>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl HeadlinesResponse {
    /// Checks the upstream status envelope. NewsAPI reports failures with
    /// `status: "error"` plus a `code`/`message` pair in an HTTP 2xx/4xx
    /// body, so this is validated before the article list is trusted.
    pub fn into_validated(self) -> Result<Vec<RawArticle>> {
        if self.status != "ok" {
            let detail = match (self.code, self.message) {
                (Some(code), Some(message)) => format!("{}: {}", code, message),
                (None, Some(message)) => message,
                (Some(code), None) => code,
                (None, None) => "upstream returned an error status".to_string(),
            };
            return Err(Error::Feed(detail));
        }
        Ok(self.articles)
    }
}

/// Maps one fetched page of raw records into articles, assigning each its
/// identifier from (source name, publish timestamp, list position).
/// `category` is caller context; the upstream does not echo it back.
pub fn map_articles(raw: Vec<RawArticle>, category: &str) -> Vec<Article> {
    raw.into_iter()
        .enumerate()
        .map(|(index, item)| {
            let source_name = item.source.as_ref().and_then(|s| s.name.as_deref());
            let id = identity::generate_id(source_name, item.published_at.as_deref(), index);
            Article {
                id,
                title: item.title,
                description: item.description,
                content: item.content,
                image_url: item.url_to_image,
                link: item.url,
                source_name: source_name.unwrap_or_default().to_string(),
                published_at: item.published_at,
                category: category.to_string(),
            }
        })
        .collect()
}

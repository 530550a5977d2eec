use hl_core::{Article, Error, Result};
use tracing::debug;

use crate::wire::{map_articles, HeadlinesResponse};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_COUNTRY: &str = "us";

/// Page size of the main feed list.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Page size of the rotating breaking-news strip.
pub const BREAKING_PAGE_SIZE: u32 = 5;

/// Explicit client configuration. The API key is injected by the caller;
/// nothing in this crate reads it from global state.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub api_key: String,
    pub base_url: String,
}

impl FeedConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Filter parameters for one top-headlines request: country and category
/// for the feed surfaces, a free-text query for search, page size for the
/// list length.
#[derive(Debug, Clone, Default)]
pub struct HeadlinesQuery {
    pub country: Option<String>,
    pub category: Option<String>,
    pub query: Option<String>,
    pub page_size: Option<u32>,
}

#[derive(Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    config: FeedConfig,
}

impl NewsClient {
    pub fn new(config: FeedConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetches one page of top headlines and assigns identifiers.
    pub async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<Vec<Article>> {
        let url = format!("{}/top-headlines", self.config.base_url);
        let mut params: Vec<(&str, String)> = vec![("apiKey", self.config.api_key.clone())];
        if let Some(country) = &query.country {
            params.push(("country", country.clone()));
        }
        if let Some(category) = &query.category {
            params.push(("category", category.clone()));
        }
        if let Some(q) = &query.query {
            params.push(("q", q.clone()));
        }
        if let Some(page_size) = query.page_size {
            params.push(("pageSize", page_size.to_string()));
        }

        let response: HeadlinesResponse = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await?
            .json()
            .await?;
        let raw = response.into_validated()?;
        let articles = map_articles(raw, query.category.as_deref().unwrap_or(""));
        debug!("fetched {} headlines", articles.len());
        Ok(articles)
    }

    /// The main feed list for a country/category.
    pub async fn headlines(&self, country: &str, category: Option<&str>) -> Result<Vec<Article>> {
        self.top_headlines(&HeadlinesQuery {
            country: Some(country.to_string()),
            category: category.map(str::to_string),
            query: None,
            page_size: Some(DEFAULT_PAGE_SIZE),
        })
        .await
    }

    /// The breaking-news strip: five headlines, no text filter.
    pub async fn breaking(&self, country: &str, category: Option<&str>) -> Result<Vec<Article>> {
        self.top_headlines(&HeadlinesQuery {
            country: Some(country.to_string()),
            category: category.map(str::to_string),
            query: None,
            page_size: Some(BREAKING_PAGE_SIZE),
        })
        .await
    }

    /// Re-locates one article after navigation: repeats the fetch,
    /// regenerates identifiers, and matches the given one against the
    /// fresh set. The feed is stateless, so a headline that has rotated
    /// out since the list was rendered is reported as not found.
    pub async fn article_by_id(&self, query: &HeadlinesQuery, id: &str) -> Result<Article> {
        let articles = self.top_headlines(query).await?;
        articles
            .into_iter()
            .find(|article| article.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

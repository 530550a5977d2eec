use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use hl_core::{token, Article, BookmarkStore, Error};
use hl_feed::client::DEFAULT_COUNTRY;
use hl_feed::HeadlinesQuery;

use crate::AppState;

/// An article together with the token that addresses it on the detail
/// route. Tokens are minted here so that every link a client follows goes
/// through the one shared codec.
#[derive(Debug, Serialize)]
pub struct TokenedArticle {
    pub token: String,
    pub article: Article,
}

impl From<Article> for TokenedArticle {
    fn from(article: Article) -> Self {
        Self {
            token: token::encode(&article.id),
            article,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HeadlinesParams {
    pub country: Option<String>,
    pub category: Option<String>,
    pub q: Option<String>,
    pub page_size: Option<u32>,
}

pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // A malformed token and a rotated-out article look the same to the
        // reader: the article is gone.
        let status = match &self.0 {
            Error::Decode(_) | Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Feed(_) | Error::Http(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

pub async fn list_headlines(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HeadlinesParams>,
) -> Result<Json<Vec<TokenedArticle>>, ApiError> {
    let query = HeadlinesQuery {
        country: Some(params.country.unwrap_or_else(|| DEFAULT_COUNTRY.to_string())),
        category: params.category,
        query: params.q,
        page_size: Some(params.page_size.unwrap_or(hl_feed::client::DEFAULT_PAGE_SIZE)),
    };
    let articles = state.client.top_headlines(&query).await?;
    Ok(Json(articles.into_iter().map(TokenedArticle::from).collect()))
}

pub async fn list_breaking(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HeadlinesParams>,
) -> Result<Json<Vec<TokenedArticle>>, ApiError> {
    let country = params.country.unwrap_or_else(|| DEFAULT_COUNTRY.to_string());
    let articles = state
        .client
        .breaking(&country, params.category.as_deref())
        .await?;
    Ok(Json(articles.into_iter().map(TokenedArticle::from).collect()))
}

/// The detail route: decode the token, repeat the fetch, match the
/// regenerated identifiers against the decoded one.
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<Json<Article>, ApiError> {
    let id = token::decode(&token)?;
    let query = HeadlinesQuery {
        country: Some(DEFAULT_COUNTRY.to_string()),
        ..Default::default()
    };
    let article = state.client.article_by_id(&query, &id).await?;
    Ok(Json(article))
}

pub async fn list_bookmarks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TokenedArticle>>, ApiError> {
    let entries = state.bookmarks.list().await?;
    Ok(Json(entries.into_iter().map(TokenedArticle::from).collect()))
}

pub async fn add_bookmark(
    State(state): State<Arc<AppState>>,
    Json(article): Json<Article>,
) -> Result<StatusCode, ApiError> {
    state.bookmarks.add(&article).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_bookmark(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = token::decode(&token)?;
    state.bookmarks.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/headlines", get(handlers::list_headlines))
        .route("/api/headlines/breaking", get(handlers::list_breaking))
        .route("/api/articles/:token", get(handlers::get_article))
        .route("/api/bookmarks", get(handlers::list_bookmarks))
        .route("/api/bookmarks", post(handlers::add_bookmark))
        .route("/api/bookmarks/:token", delete(handlers::remove_bookmark))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds and serves the API on the given port. A client that disconnects
/// mid-request has its handler future dropped, so late upstream responses
/// are discarded instead of applied.
pub async fn serve(state: AppState, port: u16) -> hl_core::Result<()> {
    let app = create_app(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::AppState;
    pub use hl_core::{Article, Error, Result};
}

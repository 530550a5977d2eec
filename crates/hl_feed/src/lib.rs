pub mod client;
pub mod wire;

pub use client::{FeedConfig, HeadlinesQuery, NewsClient};

pub mod prelude {
    pub use super::client::{FeedConfig, HeadlinesQuery, NewsClient};
    pub use hl_core::{Article, Error, Result};
}

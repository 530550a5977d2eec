pub mod error;
pub mod identity;
pub mod storage;
pub mod token;
pub mod types;

pub use error::Error;
pub use storage::BookmarkStore;
pub use types::Article;

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::storage::BookmarkStore;
    pub use super::types::Article;
    pub use super::{Error, Result};
}

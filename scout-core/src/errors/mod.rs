pub mod cache_error;
pub mod embedding_error;
pub mod fetch_error;
pub mod index_error;

pub use cache_error::CacheError;
pub use embedding_error::EmbeddingError;
pub use fetch_error::FetchError;
pub use index_error::IndexError;

/// Aggregate error for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScoutResult<T> = Result<T, ScoutError>;

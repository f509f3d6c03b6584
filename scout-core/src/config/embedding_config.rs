use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider to construct. Only "hashed-tfidf" is built in; anything
    /// else falls back to it with a warning.
    pub provider: String,
    pub dimensions: usize,
    /// Max entries in the in-memory embedding cache.
    pub l1_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "hashed-tfidf".to_string(),
            dimensions: defaults::DEFAULT_DIMENSION,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Default number of results returned when the caller gives no top_k.
    pub top_k: usize,
    /// Whether the composite reranking pass runs by default.
    pub rerank: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            rerank: true,
        }
    }
}

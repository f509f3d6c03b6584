pub mod cache_config;
pub mod defaults;
pub mod embedding_config;
pub mod fetch_config;
pub mod index_config;
pub mod retrieval_config;

pub use cache_config::CacheConfig;
pub use embedding_config::EmbeddingConfig;
pub use fetch_config::FetchConfig;
pub use index_config::IndexConfig;
pub use retrieval_config::RetrievalConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ScoutError, ScoutResult};

/// Top-level configuration, one section per subsystem.
///
/// Constructed explicitly and passed down — no process-wide mutable state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    pub index: IndexConfig,
    pub embedding: EmbeddingConfig,
    pub cache: CacheConfig,
    pub fetch: FetchConfig,
    pub retrieval: RetrievalConfig,
}

impl ScoutConfig {
    /// Load from a TOML file. Missing sections fall back to defaults.
    pub fn load(path: &Path) -> ScoutResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Parse from a TOML string.
    pub fn from_toml(raw: &str) -> ScoutResult<Self> {
        toml::from_str(raw).map_err(|e| ScoutError::Config(e.to_string()))
    }
}

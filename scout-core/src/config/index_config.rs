use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Vector index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Embedding dimension the index is built for.
    pub dimension: usize,
    /// Path of the binary vector file.
    pub index_path: PathBuf,
    /// Path of the JSON metadata sidecar.
    pub metadata_path: PathBuf,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            dimension: defaults::DEFAULT_DIMENSION,
            index_path: PathBuf::from(defaults::DEFAULT_INDEX_FILE),
            metadata_path: PathBuf::from(defaults::DEFAULT_METADATA_FILE),
        }
    }
}

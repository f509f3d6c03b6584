use serde::{Deserialize, Serialize};

/// Read-only vector index statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub documents: usize,
    pub dimension: usize,
    /// Distinct sources, sorted.
    pub sources: Vec<String>,
    /// Distinct publication years, sorted.
    pub years: Vec<i32>,
}

/// Which cache backend was selected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheBackendKind {
    Shared,
    Local,
}

impl std::fmt::Display for CacheBackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheBackendKind::Shared => write!(f, "shared"),
            CacheBackendKind::Local => write!(f, "local"),
        }
    }
}

/// Cache layer statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub backend: CacheBackendKind,
    pub keys: usize,
}

/// Combined statistics exposed by the engine facade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineStats {
    pub documents: usize,
    pub dimension: usize,
    pub sources: Vec<String>,
    pub years: Vec<i32>,
    pub cache_backend: CacheBackendKind,
    pub cache_keys: usize,
}

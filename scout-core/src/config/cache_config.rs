use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Cache layer configuration.
///
/// TTLs are per namespace; the backend choice itself is made once at
/// construction (shared SQLite preferred, in-process fallback).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Path of the shared SQLite cache database.
    pub db_path: PathBuf,
    /// API-response namespace TTL (seconds). Default 24 h.
    pub api_ttl_secs: u64,
    /// Generated-summary namespace TTL (seconds). Default 48 h.
    pub summary_ttl_secs: u64,
    /// Query-recurrence namespace TTL (seconds). Default 72 h.
    pub similar_ttl_secs: u64,
    /// "Recently processed" marker TTL (seconds). Default 2 h.
    pub processed_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(defaults::DEFAULT_CACHE_DB),
            api_ttl_secs: defaults::DEFAULT_API_TTL_SECS,
            summary_ttl_secs: defaults::DEFAULT_SUMMARY_TTL_SECS,
            similar_ttl_secs: defaults::DEFAULT_SIMILAR_TTL_SECS,
            processed_ttl_secs: defaults::DEFAULT_PROCESSED_TTL_SECS,
        }
    }
}

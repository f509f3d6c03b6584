//! CacheService — the namespaced cache facade.
//!
//! Selects a backend once at construction (shared SQLite preferred, local
//! in-process fallback) and exposes the four namespaces: source API
//! responses, generated summaries, query recurrence, and "recently
//! processed" markers.

use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use scout_core::config::CacheConfig;
use scout_core::models::document::Document;
use scout_core::models::stats::{CacheBackendKind, CacheStats};

use crate::backend::ICacheBackend;
use crate::keys;
use crate::local::LocalMemoryCache;
use crate::shared::SharedSqliteCache;

/// Descriptor behind `llm:` keys: query plus the sorted ids of the
/// documents the summary was generated over.
#[derive(Serialize)]
struct SummaryDescriptor<'a> {
    query: &'a str,
    doc_ids: Vec<String>,
}

/// The cache layer service.
pub struct CacheService {
    backend: Box<dyn ICacheBackend>,
    kind: CacheBackendKind,
    config: CacheConfig,
}

impl CacheService {
    /// Open the shared backend, falling back to the local one if the
    /// database cannot be opened. The choice is final for this instance.
    pub fn open(config: CacheConfig) -> Self {
        match SharedSqliteCache::open(&config.db_path) {
            Ok(shared) => {
                info!(db = %config.db_path.display(), "using shared cache backend");
                Self {
                    backend: Box::new(shared),
                    kind: CacheBackendKind::Shared,
                    config,
                }
            }
            Err(e) => {
                warn!(error = %e, "shared cache unavailable, using local backend");
                Self {
                    backend: Box::new(LocalMemoryCache::new()),
                    kind: CacheBackendKind::Local,
                    config,
                }
            }
        }
    }

    /// Force the local backend (tests, ephemeral runs).
    pub fn local(config: CacheConfig) -> Self {
        Self {
            backend: Box::new(LocalMemoryCache::new()),
            kind: CacheBackendKind::Local,
            config,
        }
    }

    /// Force the shared backend at a specific path.
    pub fn shared(path: &Path, config: CacheConfig) -> Result<Self, scout_core::errors::CacheError> {
        let shared = SharedSqliteCache::open(path)?;
        Ok(Self {
            backend: Box::new(shared),
            kind: CacheBackendKind::Shared,
            config,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, key: Option<&str>) -> Option<T> {
        // No derivable key is a plain miss.
        let key = key?;
        let raw = self.backend.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                // A corrupt entry is as good as a miss; drop it.
                warn!(key, error = %e, "corrupt cache entry, purging");
                self.backend.remove(key);
                None
            }
        }
    }

    fn set_json<T: Serialize>(&self, key: Option<String>, value: &T, ttl: Duration) {
        // Without a key there is nothing to store; keys::namespaced has
        // already logged the failure.
        let Some(key) = key else { return };
        match serde_json::to_string(value) {
            Ok(raw) => self.backend.set(&key, &raw, ttl),
            Err(e) => warn!(key, error = %e, "cache value serialization failed"),
        }
    }

    // ── api:<source>:<hash> — source response cache (24 h) ──────────────

    pub fn api_response(&self, source: &str, query: &str) -> Option<Vec<Document>> {
        let key = keys::namespaced(&format!("api:{source}"), &query);
        self.get_json(key.as_deref())
    }

    pub fn store_api_response(&self, source: &str, query: &str, documents: &[Document]) {
        let key = keys::namespaced(&format!("api:{source}"), &query);
        self.set_json(key, &documents, Duration::from_secs(self.config.api_ttl_secs));
    }

    // ── llm:<hash> — generated-summary cache (48 h) ─────────────────────

    pub fn summary(&self, query: &str, doc_ids: &[String]) -> Option<serde_json::Value> {
        self.get_json(self.summary_key(query, doc_ids).as_deref())
    }

    pub fn store_summary(&self, query: &str, doc_ids: &[String], summary: &serde_json::Value) {
        let key = self.summary_key(query, doc_ids);
        self.set_json(key, summary, Duration::from_secs(self.config.summary_ttl_secs));
    }

    fn summary_key(&self, query: &str, doc_ids: &[String]) -> Option<String> {
        let mut sorted = doc_ids.to_vec();
        sorted.sort();
        keys::namespaced(
            "llm",
            &SummaryDescriptor {
                query,
                doc_ids: sorted,
            },
        )
    }

    // ── similar:<hash> — query-recurrence list (72 h) ───────────────────

    pub fn similar_queries(&self, query: &str) -> Option<Vec<String>> {
        let key = keys::namespaced("similar", &keys::normalize_query(query));
        self.get_json(key.as_deref())
    }

    /// Append a query to its equivalence-class list, refreshing the TTL.
    pub fn record_similar_query(&self, query: &str) {
        let key = keys::namespaced("similar", &keys::normalize_query(query));
        let mut list: Vec<String> = self.get_json(key.as_deref()).unwrap_or_default();
        if !list.iter().any(|q| q == query) {
            list.push(query.to_string());
        }
        self.set_json(key, &list, Duration::from_secs(self.config.similar_ttl_secs));
    }

    // ── processed:<hash> — recency marker (2 h) ─────────────────────────

    /// Whether a semantically-equivalent query was processed within the
    /// recency window.
    pub fn recently_processed(&self, fingerprint: &str) -> bool {
        self.backend.get(&format!("processed:{fingerprint}")).is_some()
    }

    /// Mark a query fingerprint as processed. Best-effort: two concurrent
    /// identical queries may both pass the check before either marks.
    pub fn mark_processed(&self, fingerprint: &str) {
        self.backend.set(
            &format!("processed:{fingerprint}"),
            &chrono::Utc::now().to_rfc3339(),
            Duration::from_secs(self.config.processed_ttl_secs),
        );
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            backend: self.kind,
            keys: self.backend.len(),
        }
    }
}

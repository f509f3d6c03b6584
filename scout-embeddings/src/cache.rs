//! In-memory embedding cache using moka.
//!
//! Keys are blake3 content hashes, values are embedding vectors.
//! TinyLFU admission, size-aware eviction, idle-based expiry.

use std::time::Duration;

use moka::sync::Cache;

/// In-memory embedding cache.
pub struct EmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    /// Create a cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(1800)) // 30 min idle
            .build();
        Self { cache }
    }

    /// Hash text content into a cache key.
    pub fn key_for(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, content_hash: &str) -> Option<Vec<f32>> {
        self.cache.get(content_hash)
    }

    pub fn insert(&self, content_hash: String, embedding: Vec<f32>) {
        self.cache.insert(content_hash, embedding);
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

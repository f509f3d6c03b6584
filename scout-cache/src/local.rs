//! Local in-process cache backend over a concurrent map.
//!
//! The fallback when the shared SQLite database cannot be opened. State is
//! lost on restart, which is acceptable for a cache.

use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::backend::ICacheBackend;

struct Slot {
    value: String,
    expires_at: Instant,
}

/// In-process cache backend.
#[derive(Default)]
pub struct LocalMemoryCache {
    entries: DashMap<String, Slot>,
}

impl LocalMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ICacheBackend for LocalMemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        let expired = match self.entries.get(key) {
            Some(slot) if Instant::now() < slot.expires_at => return Some(slot.value.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            // Lazy purge on the read that found the stale entry.
            self.entries.remove(key);
        }
        None
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) {
        self.entries.insert(
            key.to_string(),
            Slot {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

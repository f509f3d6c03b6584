use std::time::Duration;

/// A TTL'd key/value store holding JSON strings.
///
/// Expiry is lazy: an expired entry is treated as absent and purged on the
/// read that finds it, never by background sweeping. Backends absorb their
/// own I/O failures (logging them) — a miss is always an acceptable answer.
pub trait ICacheBackend: Send + Sync {
    /// Fetch a live entry, purging it if it has expired.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value with a time-to-live.
    fn set(&self, key: &str, value: &str, ttl: Duration);

    /// Delete an entry.
    fn remove(&self, key: &str);

    /// Number of stored keys (may include expired entries not yet purged).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

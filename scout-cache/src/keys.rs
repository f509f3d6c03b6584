//! Cache key derivation.
//!
//! Keys are `<namespace>:<digest>` where the digest is a blake3 hex of a
//! canonical serialization of the lookup descriptor. Callers are
//! responsible for sorting any lists inside the descriptor so that
//! semantically identical requests collide to the same key.

use serde::Serialize;
use tracing::warn;

/// Fixed-width digest of a serializable descriptor.
///
/// `None` when the descriptor does not serialize; a defaulted digest
/// would alias every failing descriptor onto one key, so callers treat
/// `None` as a plain miss.
pub fn digest<T: Serialize>(descriptor: &T) -> Option<String> {
    // serde_json keeps struct field order stable, which is all the
    // canonicalization we need once lists are pre-sorted.
    let canonical = match serde_json::to_string(descriptor) {
        Ok(canonical) => canonical,
        Err(e) => {
            warn!(error = %e, "descriptor is not serializable, no cache key");
            return None;
        }
    };
    Some(blake3::hash(canonical.as_bytes()).to_hex().to_string())
}

/// `<namespace>:<digest>` key for a descriptor.
pub fn namespaced<T: Serialize>(namespace: &str, descriptor: &T) -> Option<String> {
    digest(descriptor).map(|d| format!("{namespace}:{d}"))
}

/// Normalize a query for recurrence tracking: lowercase, whitespace
/// collapsed. Textually-similar variants of a query collide.
pub fn normalize_query(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

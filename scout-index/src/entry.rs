use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use scout_core::models::document::Document;

/// A document plus indexing housekeeping, stored at the same ordinal
/// position as its vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexEntry {
    pub document: Document,
    pub indexed_at: DateTime<Utc>,
}

impl IndexEntry {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            indexed_at: Utc::now(),
        }
    }
}

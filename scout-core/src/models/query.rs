use serde::{Deserialize, Serialize};
use serde_json::json;

use super::filter::{FilterMap, FilterValue};

/// Inclusive publication-year window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub start: Option<i32>,
    #[serde(default)]
    pub end: Option<i32>,
}

/// A single literature query. Created per request; never persisted beyond
/// the cache keys derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryDescriptor {
    pub text: String,
    #[serde(default)]
    pub date_range: Option<DateRange>,
    /// Restrict retrieval to these sources, when set.
    #[serde(default)]
    pub sources: Option<Vec<String>>,
    pub top_k: usize,
}

impl QueryDescriptor {
    pub fn new(text: impl Into<String>, top_k: usize) -> Self {
        Self {
            text: text.into(),
            date_range: None,
            sources: None,
            top_k,
        }
    }

    /// Deterministic fingerprint over a canonical serialization.
    ///
    /// Sources are sorted before hashing so that semantically identical
    /// descriptors collide regardless of input ordering.
    pub fn fingerprint(&self) -> String {
        let sorted_sources = self.sources.as_ref().map(|s| {
            let mut s = s.clone();
            s.sort();
            s
        });
        let canonical = json!({
            "text": self.text,
            "date_range": self.date_range,
            "sources": sorted_sources,
            "top_k": self.top_k,
        });
        blake3::hash(canonical.to_string().as_bytes())
            .to_hex()
            .to_string()
    }

    /// Reproducible retrieval seed derived from the fingerprint.
    pub fn retrieval_seed(&self) -> u64 {
        let hash = blake3::hash(self.fingerprint().as_bytes());
        let bytes = hash.as_bytes();
        u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ])
    }

    /// Build the metadata filter map implied by this descriptor:
    /// date range → `year {min, max}`, source list → set membership.
    pub fn filters(&self) -> Option<FilterMap> {
        let mut filters = FilterMap::new();

        if let Some(range) = &self.date_range {
            if range.start.is_some() || range.end.is_some() {
                filters.insert(
                    "year".to_string(),
                    FilterValue::Range {
                        min: range.start.map(f64::from),
                        max: range.end.map(f64::from),
                    },
                );
            }
        }

        if let Some(sources) = &self.sources {
            if !sources.is_empty() {
                filters.insert(
                    "source".to_string(),
                    FilterValue::OneOf(sources.iter().map(|s| json!(s)).collect()),
                );
            }
        }

        if filters.is_empty() {
            None
        } else {
            Some(filters)
        }
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Fetch orchestrator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Corpus floor: below this document count a fetch always runs.
    pub min_corpus_size: usize,
    /// Bounded worker pool size for parallel source fetches.
    pub max_concurrent_fetches: usize,
    /// Overall wall-clock deadline for all fetch workers (milliseconds).
    pub deadline_ms: u64,
    /// Per-source result cap passed to each source client.
    pub max_results_per_source: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            min_corpus_size: constants::MIN_CORPUS_SIZE,
            max_concurrent_fetches: defaults::DEFAULT_MAX_CONCURRENT_FETCHES,
            deadline_ms: defaults::DEFAULT_FETCH_DEADLINE_MS,
            max_results_per_source: defaults::DEFAULT_MAX_RESULTS_PER_SOURCE,
        }
    }
}

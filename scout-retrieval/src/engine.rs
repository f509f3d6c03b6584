//! Over-fetch, rerank, truncate.

use std::cmp::Ordering;

use tracing::debug;

use scout_core::config::RetrievalConfig;
use scout_core::constants::OVERFETCH_FACTOR;
use scout_core::models::document::ScoredDocument;
use scout_core::models::query::QueryDescriptor;
use scout_index::VectorIndex;

use crate::scorer::{CompositeScorer, ScoreWeights};

/// Retrieval engine over one vector index.
///
/// Pulls `OVERFETCH_FACTOR * top_k` candidates by embedding distance so
/// the reranker has slack to promote documents the pure-distance ranking
/// undervalues, then sorts ascending by composite score and truncates.
pub struct RetrievalEngine {
    scorer: CompositeScorer,
    config: RetrievalConfig,
}

impl RetrievalEngine {
    pub fn new(config: RetrievalConfig) -> Self {
        Self {
            scorer: CompositeScorer::new(ScoreWeights::default()),
            config,
        }
    }

    pub fn with_weights(config: RetrievalConfig, weights: ScoreWeights) -> Self {
        Self {
            scorer: CompositeScorer::new(weights),
            config,
        }
    }

    /// Run a query against the index and return reranked results.
    ///
    /// Metadata filters from the descriptor apply during the index scan,
    /// so filtered-out rows never consume candidate slots. An empty index
    /// yields an empty list.
    pub fn retrieve(
        &self,
        index: &VectorIndex,
        query: &QueryDescriptor,
    ) -> scout_core::ScoutResult<Vec<ScoredDocument>> {
        let top_k = if query.top_k > 0 {
            query.top_k
        } else {
            self.config.top_k
        };
        let fetch_k = top_k * OVERFETCH_FACTOR;

        let filters = query.filters();
        let hits = index.search(&query.text, fetch_k, filters.as_ref())?;
        let candidates = hits.len();

        let mut scored = self.scorer.score_all(hits, &query.text);
        if self.config.rerank {
            // Stable sort: candidates with equal composites keep their
            // distance order from the index.
            scored.sort_by(|a, b| {
                a.composite
                    .partial_cmp(&b.composite)
                    .unwrap_or(Ordering::Equal)
            });
        }
        scored.truncate(top_k);

        debug!(
            query = %query.text,
            candidates,
            returned = scored.len(),
            "retrieval complete"
        );
        Ok(scored)
    }
}

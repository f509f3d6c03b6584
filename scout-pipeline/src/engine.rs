//! The engine facade: one entry point over index, cache, orchestrator,
//! and retrieval.

use std::sync::Arc;

use tracing::debug;

use scout_cache::CacheService;
use scout_core::config::ScoutConfig;
use scout_core::models::document::ScoredDocument;
use scout_core::models::query::QueryDescriptor;
use scout_core::models::stats::EngineStats;
use scout_core::traits::IDataSource;
use scout_core::ScoutResult;
use scout_embeddings::EmbeddingEngine;
use scout_index::VectorIndex;
use scout_retrieval::RetrievalEngine;

use crate::orchestrator::FetchOrchestrator;

/// Literature-scout engine. Holds every collaborator by value; callers
/// inject source clients and own the single instance.
///
/// `retrieve` takes `&mut self`: a query may refresh the index, and the
/// one-writer discipline lives in the type rather than in a lock.
pub struct ScoutEngine {
    index: VectorIndex,
    cache: CacheService,
    retrieval: RetrievalEngine,
    orchestrator: FetchOrchestrator,
    sources: Vec<Arc<dyn IDataSource>>,
}

impl ScoutEngine {
    /// Open the engine: embedding provider from config, index loaded from
    /// disk (or fresh), cache backend selected with fallback.
    pub fn open(config: ScoutConfig, sources: Vec<Arc<dyn IDataSource>>) -> ScoutResult<Self> {
        let embedder = Arc::new(EmbeddingEngine::new(&config.embedding));
        let index = VectorIndex::open(embedder, &config.index)?;
        let cache = CacheService::open(config.cache.clone());
        Ok(Self {
            index,
            cache,
            retrieval: RetrievalEngine::new(config.retrieval.clone()),
            orchestrator: FetchOrchestrator::new(config.fetch.clone()),
            sources,
        })
    }

    /// Assemble an engine from pre-built collaborators.
    pub fn with_parts(
        index: VectorIndex,
        cache: CacheService,
        retrieval: RetrievalEngine,
        orchestrator: FetchOrchestrator,
        sources: Vec<Arc<dyn IDataSource>>,
    ) -> Self {
        Self {
            index,
            cache,
            retrieval,
            orchestrator,
            sources,
        }
    }

    /// Answer a query, refreshing the corpus from external sources first
    /// when the orchestrator deems it stale.
    ///
    /// Per-source failures are absorbed into the fetch outcome; structural
    /// faults from the refresh (embedding mismatch, index persistence)
    /// propagate, as does any retrieval-stage error.
    pub async fn retrieve(
        &mut self,
        query: &QueryDescriptor,
    ) -> ScoutResult<Vec<ScoredDocument>> {
        let fingerprint = query.fingerprint();
        if self
            .orchestrator
            .needs_fetch(self.index.len(), &self.cache, &fingerprint)
        {
            let outcome = self
                .orchestrator
                .fetch_and_index(query, &self.sources, &self.cache, &mut self.index)
                .await?;
            debug!(
                indexed = outcome.indexed,
                corpus = self.index.len(),
                "corpus refreshed"
            );
        } else {
            debug!(fingerprint = %fingerprint, "corpus fresh, skipping fetch");
        }

        self.retrieval.retrieve(&self.index, query)
    }

    pub fn stats(&self) -> EngineStats {
        let index = self.index.stats();
        let cache = self.cache.stats();
        EngineStats {
            documents: index.documents,
            dimension: index.dimension,
            sources: index.sources,
            years: index.years,
            cache_backend: cache.backend,
            cache_keys: cache.keys,
        }
    }
}

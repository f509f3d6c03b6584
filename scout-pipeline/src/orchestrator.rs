//! Fetch orchestration: threshold check, bounded-parallel source fetches
//! with per-source caching, merge, dedup, validate, index.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, warn};

use scout_cache::CacheService;
use scout_core::config::FetchConfig;
use scout_core::errors::FetchError;
use scout_core::models::document::Document;
use scout_core::models::query::QueryDescriptor;
use scout_core::traits::{IDataSource, IDocumentProcessor};
use scout_core::ScoutResult;
use scout_index::VectorIndex;

use crate::enhancement;
use crate::processing::DocumentProcessor;

/// What one orchestrated fetch did. Failures are per-source and
/// non-fatal; they are reported here rather than propagated.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Sources answered from the api cache.
    pub cache_hits: usize,
    /// Sources fetched live within the deadline.
    pub fetched_sources: usize,
    /// Documents in the merged result before dedup/validation.
    pub merged: usize,
    /// Documents added to the index.
    pub indexed: usize,
    /// Per-source structural failures (timeouts, panicked workers).
    pub failures: Vec<FetchError>,
}

/// One source's position in the merge, in dispatch order.
enum SourceSlot {
    Cached(Vec<Document>),
    Pending {
        name: String,
        handle: JoinHandle<Vec<Document>>,
    },
}

pub struct FetchOrchestrator {
    config: FetchConfig,
    processor: DocumentProcessor,
}

impl FetchOrchestrator {
    pub fn new(config: FetchConfig) -> Self {
        Self {
            config,
            processor: DocumentProcessor::new(),
        }
    }

    /// Whether this query warrants hitting external sources: the corpus
    /// is below its floor, or no equivalent query was processed within
    /// the recency window.
    ///
    /// Equivalence is fingerprint-exact: only a query with the same text,
    /// filters, and top_k suppresses a refetch. The `similar:` recurrence
    /// lists record looser textual variants but deliberately do not feed
    /// this decision, since a variant may carry different filters.
    pub fn needs_fetch(&self, corpus_size: usize, cache: &CacheService, fingerprint: &str) -> bool {
        if corpus_size < self.config.min_corpus_size {
            return true;
        }
        !cache.recently_processed(fingerprint)
    }

    /// Run the full fetch pipeline for one query.
    ///
    /// Source fetches run under a bounded worker pool and one shared
    /// wall-clock deadline. A source that fails or misses the deadline is
    /// dropped from the merge without disturbing its siblings. Completing
    /// the pipeline marks the query processed even when nothing new was
    /// indexed.
    pub async fn fetch_and_index(
        &self,
        query: &QueryDescriptor,
        sources: &[Arc<dyn IDataSource>],
        cache: &CacheService,
        index: &mut VectorIndex,
    ) -> ScoutResult<FetchOutcome> {
        let dispatched = enhancement::enhance(&query.text);
        debug!(query = %query.text, dispatched = %dispatched, "dispatching fetch");

        let mut outcome = FetchOutcome::default();
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_fetches));
        let deadline = Instant::now() + Duration::from_millis(self.config.deadline_ms);

        // Dispatch order fixes merge order; cache hits skip the pool.
        let mut slots = Vec::with_capacity(sources.len());
        for source in sources {
            if let Some(documents) = cache.api_response(source.name(), &dispatched) {
                debug!(source = source.name(), count = documents.len(), "api cache hit");
                outcome.cache_hits += 1;
                slots.push(SourceSlot::Cached(documents));
                continue;
            }
            let source = Arc::clone(source);
            let permits = Arc::clone(&semaphore);
            let query_text = dispatched.clone();
            let max_results = self.config.max_results_per_source;
            let name = source.name().to_string();
            let handle = tokio::spawn(async move {
                let Ok(_permit) = permits.acquire_owned().await else {
                    // Pool torn down mid-flight; nothing to report.
                    return Vec::new();
                };
                source.search(&query_text, max_results).await
            });
            slots.push(SourceSlot::Pending { name, handle });
        }

        // Settle in dispatch order, all bounded by the one deadline.
        let mut merged: Vec<Document> = Vec::new();
        for slot in slots {
            match slot {
                SourceSlot::Cached(documents) => merged.extend(documents),
                SourceSlot::Pending { name, mut handle } => {
                    match timeout_at(deadline, &mut handle).await {
                        Ok(Ok(documents)) => {
                            cache.store_api_response(&name, &dispatched, &documents);
                            debug!(source = %name, count = documents.len(), "source fetched");
                            outcome.fetched_sources += 1;
                            merged.extend(documents);
                        }
                        Ok(Err(_join_error)) => {
                            let error = FetchError::WorkerPanicked { source_name: name };
                            warn!(error = %error, "fetch worker lost");
                            outcome.failures.push(error);
                        }
                        Err(_elapsed) => {
                            handle.abort();
                            let error = FetchError::DeadlineExceeded {
                                waited_ms: self.config.deadline_ms,
                            };
                            warn!(source = %name, error = %error, "source dropped");
                            outcome.failures.push(error);
                        }
                    }
                }
            }
        }
        outcome.merged = merged.len();

        // First occurrence wins, and titles already indexed count as seen.
        let mut seen: HashSet<String> = index
            .entries()
            .map(|entry| entry.document.normalized_title())
            .collect();
        let mut accepted = Vec::new();
        for document in merged {
            let document = self.processor.prepare(document);
            if !seen.insert(document.normalized_title()) {
                continue;
            }
            if self.processor.validate(&document) {
                accepted.push(document);
            }
        }

        if !accepted.is_empty() {
            outcome.indexed = index.add(&accepted)?;
            index.save()?;
        }

        cache.mark_processed(&query.fingerprint());
        cache.record_similar_query(&query.text);

        info!(
            merged = outcome.merged,
            indexed = outcome.indexed,
            cache_hits = outcome.cache_hits,
            failures = outcome.failures.len(),
            "fetch pipeline complete"
        );
        Ok(outcome)
    }
}

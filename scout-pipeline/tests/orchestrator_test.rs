//! Orchestrator behavior with mock sources: fetch thresholds, bounded
//! parallelism under a deadline, per-source caching, dedup, validation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use scout_cache::CacheService;
use scout_core::config::{CacheConfig, FetchConfig, IndexConfig};
use scout_core::models::document::Document;
use scout_core::models::query::QueryDescriptor;
use scout_core::traits::IDataSource;
use scout_embeddings::HashedTfIdf;
use scout_index::VectorIndex;
use scout_pipeline::FetchOrchestrator;

/// Scripted source: fixed result set, optional artificial latency,
/// request log for assertions.
struct StaticSource {
    name: String,
    papers: Vec<Document>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl StaticSource {
    fn new(name: &str, papers: Vec<Document>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            papers,
            delay: None,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
        })
    }

    fn slow(name: &str, papers: Vec<Document>, delay: Duration) -> Arc<Self> {
        let mut source = Self::new(name, papers);
        Arc::get_mut(&mut source).unwrap().delay = Some(delay);
        source
    }
}

#[async_trait]
impl IDataSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn search(&self, query: &str, max_results: usize) -> Vec<Document> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.papers.iter().take(max_results).cloned().collect()
    }
}

fn paper(id: &str, title: &str) -> Document {
    test_fixtures::paper(
        id,
        title,
        "EEG-based brain-computer interface study with motor imagery decoding \
         and cortical signal classification across sessions.",
        Some(2023),
        Some(12),
    )
}

fn fresh_index(dir: &std::path::Path) -> VectorIndex {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let config = IndexConfig {
        dimension: 64,
        index_path: dir.join("index.bin"),
        metadata_path: dir.join("metadata.json"),
    };
    VectorIndex::new(Arc::new(HashedTfIdf::new(64)), &config)
}

fn cache() -> CacheService {
    CacheService::local(CacheConfig::default())
}

fn fast_config() -> FetchConfig {
    FetchConfig {
        deadline_ms: 200,
        ..Default::default()
    }
}

fn sources(list: &[Arc<StaticSource>]) -> Vec<Arc<dyn IDataSource>> {
    list.iter()
        .map(|s| Arc::clone(s) as Arc<dyn IDataSource>)
        .collect()
}

#[test]
fn fetch_needed_below_corpus_floor() {
    let orchestrator = FetchOrchestrator::new(FetchConfig::default());
    let cache = cache();
    cache.mark_processed("fp");
    // Marker or not, a small corpus always fetches.
    assert!(orchestrator.needs_fetch(10, &cache, "fp"));
}

#[test]
fn fetch_skipped_when_corpus_full_and_marker_fresh() {
    let orchestrator = FetchOrchestrator::new(FetchConfig::default());
    let cache = cache();
    cache.mark_processed("fp");
    assert!(!orchestrator.needs_fetch(50, &cache, "fp"));
}

#[test]
fn fetch_needed_without_recent_marker() {
    let orchestrator = FetchOrchestrator::new(FetchConfig::default());
    assert!(orchestrator.needs_fetch(500, &cache(), "fp"));
}

#[tokio::test]
async fn fetch_merges_sources_in_dispatch_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut index = fresh_index(dir.path());
    let cache = cache();
    let orchestrator = FetchOrchestrator::new(fast_config());

    let a = StaticSource::new("arxiv", vec![paper("a1", "Motor imagery decoding study one")]);
    let b = StaticSource::new("pubmed", vec![paper("b1", "Cortical signal decoding study two")]);
    let outcome = orchestrator
        .fetch_and_index(
            &QueryDescriptor::new("motor imagery", 5),
            &sources(&[a, b]),
            &cache,
            &mut index,
        )
        .await
        .unwrap();

    assert_eq!(outcome.merged, 2);
    assert_eq!(outcome.indexed, 2);
    let ids: Vec<&str> = index.entries().map(|e| e.document.id.as_str()).collect();
    assert_eq!(ids, ["a1", "b1"]);
}

#[tokio::test(start_paused = true)]
async fn slow_source_is_dropped_at_the_deadline() {
    let dir = tempfile::tempdir().unwrap();
    let mut index = fresh_index(dir.path());
    let cache = cache();
    let orchestrator = FetchOrchestrator::new(fast_config());

    let a = StaticSource::new("arxiv", vec![paper("a1", "Fast source paper number one")]);
    let slow = StaticSource::slow(
        "pubmed",
        vec![paper("s1", "Slow source paper never merged")],
        Duration::from_secs(30),
    );
    let c = StaticSource::new("semantic", vec![paper("c1", "Fast source paper number two")]);

    let outcome = orchestrator
        .fetch_and_index(
            &QueryDescriptor::new("motor imagery", 5),
            &sources(&[a, slow, c]),
            &cache,
            &mut index,
        )
        .await
        .unwrap();

    assert_eq!(outcome.fetched_sources, 2);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.indexed, 2);
    let ids: Vec<&str> = index.entries().map(|e| e.document.id.as_str()).collect();
    assert_eq!(ids, ["a1", "c1"], "late results must be discarded, siblings kept");
}

#[tokio::test(start_paused = true)]
async fn worker_pool_is_bounded() {
    let dir = tempfile::tempdir().unwrap();
    let mut index = fresh_index(dir.path());
    let cache = cache();
    let config = FetchConfig {
        max_concurrent_fetches: 1,
        deadline_ms: 5_000,
        ..Default::default()
    };
    let orchestrator = FetchOrchestrator::new(config);

    let shared_in_flight = Arc::new(AtomicUsize::new(0));
    let shared_max = Arc::new(AtomicUsize::new(0));
    let list: Vec<Arc<StaticSource>> = (0..3)
        .map(|i| {
            let mut s = StaticSource::slow(
                &format!("src{i}"),
                vec![paper(&format!("d{i}"), &format!("Decoding paper number {i} here"))],
                Duration::from_millis(50),
            );
            let inner = Arc::get_mut(&mut s).unwrap();
            inner.in_flight = Arc::clone(&shared_in_flight);
            inner.max_in_flight = Arc::clone(&shared_max);
            s
        })
        .collect();

    orchestrator
        .fetch_and_index(
            &QueryDescriptor::new("motor imagery", 5),
            &sources(&list),
            &cache,
            &mut index,
        )
        .await
        .unwrap();

    assert_eq!(shared_max.load(Ordering::SeqCst), 1, "one permit means one worker at a time");
}

#[tokio::test]
async fn duplicate_titles_collapse_first_seen_wins() {
    let dir = tempfile::tempdir().unwrap();
    let mut index = fresh_index(dir.path());
    let cache = cache();
    let orchestrator = FetchOrchestrator::new(fast_config());

    let a = StaticSource::new(
        "arxiv",
        vec![paper("first", "Shared Motor Imagery Title")],
    );
    let b = StaticSource::new(
        "pubmed",
        vec![paper("second", "  shared motor imagery title  ")],
    );
    let outcome = orchestrator
        .fetch_and_index(
            &QueryDescriptor::new("motor imagery", 5),
            &sources(&[a, b]),
            &cache,
            &mut index,
        )
        .await
        .unwrap();

    assert_eq!(outcome.merged, 2);
    assert_eq!(outcome.indexed, 1);
    assert_eq!(index.entries().next().unwrap().document.id, "first");
}

#[tokio::test]
async fn refetch_skips_titles_already_indexed() {
    let dir = tempfile::tempdir().unwrap();
    let mut index = fresh_index(dir.path());
    let cache = cache();
    let orchestrator = FetchOrchestrator::new(fast_config());
    let query = QueryDescriptor::new("motor imagery", 5);

    let a = StaticSource::new("arxiv", vec![paper("a1", "Motor imagery decoding study one")]);
    let srcs = sources(&[Arc::clone(&a)]);
    orchestrator
        .fetch_and_index(&query, &srcs, &cache, &mut index)
        .await
        .unwrap();
    let outcome = orchestrator
        .fetch_and_index(&query, &srcs, &cache, &mut index)
        .await
        .unwrap();

    assert_eq!(outcome.indexed, 0);
    assert_eq!(index.len(), 1);
}

#[tokio::test]
async fn second_fetch_answers_from_the_api_cache() {
    let dir = tempfile::tempdir().unwrap();
    let mut index = fresh_index(dir.path());
    let cache = cache();
    let orchestrator = FetchOrchestrator::new(fast_config());
    let query = QueryDescriptor::new("motor imagery", 5);

    let a = StaticSource::new("arxiv", vec![paper("a1", "Motor imagery decoding study one")]);
    let srcs = sources(&[Arc::clone(&a)]);
    orchestrator
        .fetch_and_index(&query, &srcs, &cache, &mut index)
        .await
        .unwrap();
    let outcome = orchestrator
        .fetch_and_index(&query, &srcs, &cache, &mut index)
        .await
        .unwrap();

    assert_eq!(a.calls.load(Ordering::SeqCst), 1, "second run must not hit the source");
    assert_eq!(outcome.cache_hits, 1);
}

#[tokio::test]
async fn completion_marks_the_query_processed_even_when_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut index = fresh_index(dir.path());
    let cache = cache();
    let orchestrator = FetchOrchestrator::new(fast_config());
    let query = QueryDescriptor::new("motor imagery", 5);

    let empty = StaticSource::new("arxiv", vec![]);
    let outcome = orchestrator
        .fetch_and_index(&query, &sources(&[empty]), &cache, &mut index)
        .await
        .unwrap();

    assert_eq!(outcome.indexed, 0);
    assert!(cache.recently_processed(&query.fingerprint()));
    assert!(cache.similar_queries("motor imagery").is_some());
}

#[tokio::test]
async fn generic_query_is_enhanced_before_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    let mut index = fresh_index(dir.path());
    let cache = cache();
    let orchestrator = FetchOrchestrator::new(fast_config());

    let a = StaticSource::new("arxiv", vec![]);
    orchestrator
        .fetch_and_index(
            &QueryDescriptor::new("attention regulation", 5),
            &sources(&[Arc::clone(&a)]),
            &cache,
            &mut index,
        )
        .await
        .unwrap();

    let seen = a.queries.lock().unwrap();
    assert_eq!(seen[0], "attention regulation brain-computer interface");
}

#[tokio::test]
async fn invalid_documents_never_reach_the_index() {
    let dir = tempfile::tempdir().unwrap();
    let mut index = fresh_index(dir.path());
    let cache = cache();
    let orchestrator = FetchOrchestrator::new(fast_config());

    let a = StaticSource::new(
        "arxiv",
        vec![
            paper("ok", "Motor imagery decoding study one"),
            test_fixtures::paper("bad", "Tiny", "Too short.", None, None),
        ],
    );
    let outcome = orchestrator
        .fetch_and_index(
            &QueryDescriptor::new("motor imagery", 5),
            &sources(&[a]),
            &cache,
            &mut index,
        )
        .await
        .unwrap();

    assert_eq!(outcome.merged, 2);
    assert_eq!(outcome.indexed, 1);
}

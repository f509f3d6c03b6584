//! Engine facade behavior: fetch-then-retrieve on a cold corpus, fetch
//! suppression on a warm one, and combined stats.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use scout_cache::CacheService;
use scout_core::config::{CacheConfig, FetchConfig, IndexConfig, RetrievalConfig};
use scout_core::models::document::Document;
use scout_core::models::query::QueryDescriptor;
use scout_core::models::stats::CacheBackendKind;
use scout_core::traits::IDataSource;
use scout_embeddings::HashedTfIdf;
use scout_index::VectorIndex;
use scout_pipeline::{FetchOrchestrator, ScoutEngine};
use scout_retrieval::RetrievalEngine;

struct CountingSource {
    papers: Vec<Document>,
    calls: AtomicUsize,
}

#[async_trait]
impl IDataSource for CountingSource {
    fn name(&self) -> &str {
        "arxiv"
    }

    async fn search(&self, _query: &str, max_results: usize) -> Vec<Document> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.papers.iter().take(max_results).cloned().collect()
    }
}

fn engine_with(
    dir: &std::path::Path,
    seed: &[Document],
    source: Arc<CountingSource>,
) -> ScoutEngine {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let config = IndexConfig {
        dimension: 64,
        index_path: dir.join("index.bin"),
        metadata_path: dir.join("metadata.json"),
    };
    let mut index = VectorIndex::new(Arc::new(HashedTfIdf::new(64)), &config);
    if !seed.is_empty() {
        index.add(seed).unwrap();
    }
    ScoutEngine::with_parts(
        index,
        CacheService::local(CacheConfig::default()),
        RetrievalEngine::new(RetrievalConfig::default()),
        FetchOrchestrator::new(FetchConfig {
            deadline_ms: 200,
            ..Default::default()
        }),
        vec![source as Arc<dyn IDataSource>],
    )
}

/// Fifty distinct valid papers, enough to clear the corpus floor.
fn large_corpus() -> Vec<Document> {
    (0..50)
        .map(|i| {
            test_fixtures::paper(
                &format!("c{i:02}"),
                &format!("EEG decoding study number {i} with motor imagery"),
                "Electroencephalography study of brain computer interface methods \
                 with signal processing and classification analysis.",
                Some(2015 + (i % 10) as i32),
                Some(i as u64),
            )
        })
        .collect()
}

#[tokio::test]
async fn cold_corpus_fetches_then_answers() {
    let dir = tempfile::tempdir().unwrap();
    let source = Arc::new(CountingSource {
        papers: test_fixtures::corpus(),
        calls: AtomicUsize::new(0),
    });
    let mut engine = engine_with(dir.path(), &[], Arc::clone(&source));

    let results = engine
        .retrieve(&QueryDescriptor::new("neurofeedback training", 5))
        .await
        .unwrap();

    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert!(!results.is_empty());
    assert_eq!(results[0].document.id, "p06");
}

#[tokio::test]
async fn warm_corpus_with_fresh_marker_skips_the_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let source = Arc::new(CountingSource {
        papers: test_fixtures::corpus(),
        calls: AtomicUsize::new(0),
    });
    let mut engine = engine_with(dir.path(), &large_corpus(), Arc::clone(&source));
    let query = QueryDescriptor::new("motor imagery decoding", 5);

    // First retrieval fetches (no marker yet) and marks the query.
    engine.retrieve(&query).await.unwrap();
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);

    // Second retrieval finds a full corpus and a fresh marker.
    let results = engine.retrieve(&query).await.unwrap();
    assert_eq!(source.calls.load(Ordering::SeqCst), 1, "no refetch while the marker is fresh");
    assert!(!results.is_empty());
}

#[tokio::test]
async fn a_different_query_still_triggers_a_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let source = Arc::new(CountingSource {
        papers: Vec::new(),
        calls: AtomicUsize::new(0),
    });
    let mut engine = engine_with(dir.path(), &large_corpus(), Arc::clone(&source));

    engine
        .retrieve(&QueryDescriptor::new("motor imagery decoding", 5))
        .await
        .unwrap();
    engine
        .retrieve(&QueryDescriptor::new("ssvep calibration", 5))
        .await
        .unwrap();

    assert_eq!(source.calls.load(Ordering::SeqCst), 2, "each fingerprint gets its own marker");
}

#[tokio::test]
async fn a_persistence_fault_during_refresh_propagates() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the index directory should be makes save() fail.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let source = Arc::new(CountingSource {
        papers: test_fixtures::corpus(),
        calls: AtomicUsize::new(0),
    });
    let mut engine = engine_with(&blocker, &[], Arc::clone(&source));

    let result = engine
        .retrieve(&QueryDescriptor::new("eeg classification", 5))
        .await;

    assert!(matches!(result, Err(scout_core::ScoutError::Index(_))));
}

#[tokio::test]
async fn stats_combine_index_and_cache() {
    let dir = tempfile::tempdir().unwrap();
    let source = Arc::new(CountingSource {
        papers: test_fixtures::corpus(),
        calls: AtomicUsize::new(0),
    });
    let mut engine = engine_with(dir.path(), &[], Arc::clone(&source));

    engine
        .retrieve(&QueryDescriptor::new("eeg classification", 5))
        .await
        .unwrap();

    let stats = engine.stats();
    assert_eq!(stats.documents, 10);
    assert_eq!(stats.dimension, 64);
    assert_eq!(stats.sources, vec!["arxiv".to_string()]);
    assert_eq!(stats.cache_backend, CacheBackendKind::Local);
    assert!(stats.cache_keys > 0);
}

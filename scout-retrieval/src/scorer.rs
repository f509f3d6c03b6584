//! Composite relevance scoring.
//!
//! The index ranks by squared-Euclidean distance, where lower is better.
//! The composite score keeps that orientation: each quality signal is a
//! value in `[0, 1]` where higher is better, so it enters the sum as a
//! weighted penalty `w * (1 - signal)`. A recent, well-cited paper whose
//! title matches the query subtracts nothing; a stale uncited paper pays
//! the full penalty on those terms.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use scout_core::models::document::{Document, ScoredDocument, SearchHit};

/// Weights of the five composite components. They sum to 1.0 by default;
/// callers overriding them are responsible for keeping the scale sane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub similarity: f64,
    pub recency: f64,
    pub citations: f64,
    pub title_overlap: f64,
    pub abstract_overlap: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            similarity: 0.40,
            recency: 0.20,
            citations: 0.15,
            title_overlap: 0.15,
            abstract_overlap: 0.10,
        }
    }
}

/// Scores candidates against a query. Stateless apart from the weights.
#[derive(Debug, Clone, Default)]
pub struct CompositeScorer {
    weights: ScoreWeights,
}

impl CompositeScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Composite score for one hit. Lower is better.
    pub fn score(&self, hit: &SearchHit, query_terms: &[String]) -> f64 {
        let w = &self.weights;
        let doc = &hit.document;
        w.similarity * f64::from(hit.distance)
            + w.recency * (1.0 - recency_signal(doc))
            + w.citations * (1.0 - citation_signal(doc))
            + w.title_overlap * (1.0 - term_overlap(query_terms, &doc.title))
            + w.abstract_overlap * (1.0 - term_overlap(query_terms, &doc.abstract_text))
    }

    /// Score a candidate list, preserving input order in the output.
    pub fn score_all(&self, hits: Vec<SearchHit>, query: &str) -> Vec<ScoredDocument> {
        let terms = query_terms(query);
        hits.into_iter()
            .map(|hit| {
                let composite = self.score(&hit, &terms);
                ScoredDocument {
                    document: hit.document,
                    distance: hit.distance,
                    composite,
                }
            })
            .collect()
    }
}

/// Publication-age signal. Newer is higher; unknown years sit mid-scale
/// rather than at either extreme.
fn recency_signal(doc: &Document) -> f64 {
    let Some(year) = doc.year else { return 0.5 };
    let age = i64::from(Utc::now().year()) - i64::from(year);
    match age {
        i64::MIN..=1 => 1.0,
        2..=3 => 0.8,
        4..=5 => 0.6,
        6..=10 => 0.4,
        _ => 0.2,
    }
}

/// Citation-count signal on a coarse logarithmic-ish ladder. Raw counts
/// span five orders of magnitude; buckets keep one landmark paper from
/// drowning out everything else.
fn citation_signal(doc: &Document) -> f64 {
    let Some(count) = doc.citation_count else { return 0.5 };
    match count {
        0 => 0.3,
        1..=9 => 0.5,
        10..=49 => 0.7,
        50..=99 => 0.8,
        100..=499 => 0.9,
        _ => 1.0,
    }
}

/// Fraction of query terms contained in `text`, case-insensitive
/// substring containment. "eeg" matches "EEG-based" and partial word
/// forms match their inflections, which is the right bias for paper
/// titles. No terms to check, or no text to check against, is a neutral
/// 0.5 rather than a penalty.
fn term_overlap(query_terms: &[String], text: &str) -> f64 {
    if query_terms.is_empty() || text.is_empty() {
        return 0.5;
    }
    let haystack = text.to_lowercase();
    let present = query_terms.iter().filter(|t| haystack.contains(t.as_str())).count();
    present as f64 / query_terms.len() as f64
}

/// Lowercased whitespace-split query terms.
pub(crate) fn query_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

//! # scout-retrieval
//!
//! Retrieval and reranking over the vector index. The index answers by
//! embedding distance alone; this crate over-fetches and re-orders those
//! candidates by a composite score that also weighs recency, citation
//! standing, and lexical overlap with the query.

pub mod engine;
pub mod scorer;

pub use engine::RetrievalEngine;
pub use scorer::{CompositeScorer, ScoreWeights};

//! # scout-embeddings
//!
//! Embedding generation for the Scout engine: a deterministic local
//! provider plus an engine wrapper that adds an in-memory cache tier and
//! dimension validation.

pub mod cache;
pub mod engine;
pub mod providers;

pub use engine::EmbeddingEngine;
pub use providers::HashedTfIdf;

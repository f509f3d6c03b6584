//! # scout-pipeline
//!
//! The top of the stack: decides when the corpus needs refreshing, runs
//! bounded-parallel source fetches with per-source caching, cleans and
//! validates what comes back, and feeds the index. `ScoutEngine` ties the
//! pipeline to the retrieval engine behind one entry point.

pub mod engine;
pub mod enhancement;
pub mod orchestrator;
pub mod processing;

pub use engine::ScoutEngine;
pub use orchestrator::{FetchOrchestrator, FetchOutcome};
pub use processing::DocumentProcessor;

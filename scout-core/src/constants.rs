/// Scout system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Candidate over-fetch multiplier applied before reranking.
/// Guards against filters or reranking discarding top raw hits.
pub const OVERFETCH_FACTOR: usize = 2;

/// Corpus floor below which a query always triggers a source fetch.
pub const MIN_CORPUS_SIZE: usize = 50;

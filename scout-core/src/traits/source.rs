use async_trait::async_trait;

use crate::models::document::Document;

/// External literature source client (arXiv, PubMed, ...).
///
/// Failures are the client's to absorb: implementations log transport,
/// rate-limit, and parse errors and return an empty list rather than
/// erroring, so one bad source never sinks a request.
#[async_trait]
pub trait IDataSource: Send + Sync {
    /// Source identifier, e.g. "arxiv". Also used as the cache namespace.
    fn name(&self) -> &str;

    /// Search the source for documents matching the query.
    async fn search(&self, query: &str, max_results: usize) -> Vec<Document>;
}

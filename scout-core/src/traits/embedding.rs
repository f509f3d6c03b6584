use crate::errors::ScoutResult;

/// Turns text into fixed-width vectors.
///
/// The index leans on two promises: the same text always maps to the
/// same vector, and every vector has exactly `dimensions()` components.
/// Breaking either corrupts stored distances.
pub trait IEmbeddingProvider: Send + Sync {
    /// Vector for one text.
    fn embed(&self, text: &str) -> ScoutResult<Vec<f32>>;

    /// Vectors for a batch, one per input, in input order.
    fn embed_batch(&self, texts: &[String]) -> ScoutResult<Vec<Vec<f32>>>;

    /// Width of every vector this provider emits.
    fn dimensions(&self) -> usize;

    /// Short identifier used in logs and stats.
    fn name(&self) -> &str;

    /// False when the provider cannot serve right now (remote model
    /// down, resources missing); callers surface this as an error
    /// instead of embedding garbage.
    fn is_available(&self) -> bool;
}

pub mod hashed_tfidf;

pub use hashed_tfidf::HashedTfIdf;

use scout_core::config::EmbeddingConfig;
use scout_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Construct the provider named in the config.
///
/// Only the hashed TF-IDF provider is built in; unknown names fall back
/// to it so the engine always has a working provider.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    if config.provider != "hashed-tfidf" {
        warn!(
            requested = %config.provider,
            "unknown embedding provider, falling back to hashed-tfidf"
        );
    }
    Box::new(HashedTfIdf::new(config.dimensions))
}

//! EmbeddingEngine — provider wrapper with caching and dimension checks.
//!
//! Implements `IEmbeddingProvider` itself, so the index can treat it as
//! any other provider.

use scout_core::config::EmbeddingConfig;
use scout_core::errors::{EmbeddingError, ScoutResult};
use scout_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::EmbeddingCache;
use crate::providers;

/// The main embedding engine: provider + in-memory cache + validation.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: EmbeddingCache,
    dimensions: usize,
}

impl EmbeddingEngine {
    /// Build the engine from configuration.
    pub fn new(config: &EmbeddingConfig) -> Self {
        let provider = providers::create_provider(config);
        info!(
            provider = provider.name(),
            dims = config.dimensions,
            "embedding engine initialized"
        );
        Self {
            provider,
            cache: EmbeddingCache::new(config.l1_cache_size),
            dimensions: config.dimensions,
        }
    }

    /// Wrap an explicit provider (used by tests and custom setups).
    pub fn with_provider(provider: Box<dyn IEmbeddingProvider>, l1_cache_size: u64) -> Self {
        let dimensions = provider.dimensions();
        Self {
            provider,
            cache: EmbeddingCache::new(l1_cache_size),
            dimensions,
        }
    }

    fn check_available(&self) -> ScoutResult<()> {
        if !self.provider.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: self.provider.name().to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn check_dimensions(&self, vector: &[f32]) -> ScoutResult<()> {
        if vector.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            }
            .into());
        }
        Ok(())
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> ScoutResult<Vec<f32>> {
        let key = EmbeddingCache::key_for(text);
        if let Some(cached) = self.cache.get(&key) {
            debug!(hash = %key, "embedding cache hit");
            return Ok(cached);
        }

        self.check_available()?;
        let vector = self.provider.embed(text)?;
        self.check_dimensions(&vector)?;
        self.cache.insert(key, vector.clone());
        Ok(vector)
    }

    fn embed_batch(&self, texts: &[String]) -> ScoutResult<Vec<Vec<f32>>> {
        // Embed only cache misses, preserving input order.
        let keys: Vec<String> = texts.iter().map(|t| EmbeddingCache::key_for(t)).collect();
        let mut out: Vec<Option<Vec<f32>>> = keys.iter().map(|k| self.cache.get(k)).collect();

        let misses: Vec<usize> = (0..texts.len()).filter(|&i| out[i].is_none()).collect();
        if !misses.is_empty() {
            self.check_available()?;
            let miss_texts: Vec<String> = misses.iter().map(|&i| texts[i].clone()).collect();
            let vectors = self.provider.embed_batch(&miss_texts)?;
            for vector in &vectors {
                self.check_dimensions(vector)?;
            }
            for (&i, vector) in misses.iter().zip(vectors) {
                self.cache.insert(keys[i].clone(), vector.clone());
                out[i] = Some(vector);
            }
        }

        // All slots are filled at this point.
        Ok(out.into_iter().flatten().collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        self.provider.name()
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}

//! Hashed TF-IDF embedding provider.
//!
//! Buckets terms into a fixed-dimension vector via the hashing trick and
//! weights them by term frequency with a length-damped IDF proxy. Not as
//! semantically rich as neural embeddings, but deterministic, dependency-free
//! at runtime, and good enough for title+abstract similarity at corpus sizes
//! of hundreds to low thousands.

use std::collections::HashMap;

use rayon::prelude::*;

use scout_core::errors::ScoutResult;
use scout_core::traits::IEmbeddingProvider;

/// Deterministic local embedding provider.
pub struct HashedTfIdf {
    dimensions: usize,
}

impl HashedTfIdf {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Bucket and sign for a term, both derived from its blake3 hash.
    ///
    /// The sign bit spreads collisions: two terms landing in the same
    /// bucket with opposite signs cancel rather than compound.
    fn term_slot(term: &str, dims: usize) -> (usize, f32) {
        let hash = blake3::hash(term.as_bytes());
        let bytes = hash.as_bytes();
        let bucket = u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]) as usize
            % dims;
        let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
        (bucket, sign)
    }

    /// Lowercase alphanumeric terms, minimum length 2.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '-')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];

        for (term, count) in &tf {
            let freq = count / total;
            // Longer terms carry more signal; short ones are mostly stopwords.
            let weight = freq * (1.0 + (term.len() as f32).ln());
            let (bucket, sign) = Self::term_slot(term, self.dimensions);
            vec[bucket] += sign * weight;
        }

        // L2 normalize so squared-Euclidean distances are comparable.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl IEmbeddingProvider for HashedTfIdf {
    fn embed(&self, text: &str) -> ScoutResult<Vec<f32>> {
        Ok(self.vector_for(text))
    }

    fn embed_batch(&self, texts: &[String]) -> ScoutResult<Vec<Vec<f32>>> {
        Ok(texts.par_iter().map(|t| self.vector_for(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-tfidf"
    }

    fn is_available(&self) -> bool {
        true
    }
}

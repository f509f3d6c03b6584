//! VectorIndex — embeds documents, owns the vector block and the parallel
//! metadata list, and persists both as an atomic pair.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use scout_core::config::IndexConfig;
use scout_core::errors::{EmbeddingError, IndexError, ScoutResult};
use scout_core::models::document::{Document, SearchHit};
use scout_core::models::filter::{matches_filters, FilterMap};
use scout_core::models::stats::IndexStats;
use scout_core::traits::IEmbeddingProvider;

use crate::entry::IndexEntry;
use crate::flat::FlatIndex;

/// The vector index. Exclusively owns embeddings and metadata.
///
/// Invariant: `metadata.len() == flat.len()` at all times. Writes are not
/// internally synchronized — callers serialize `add`/`save` (single-writer
/// discipline), which `&mut self` enforces within one process.
pub struct VectorIndex {
    flat: FlatIndex,
    metadata: Vec<IndexEntry>,
    embedder: Arc<dyn IEmbeddingProvider>,
    index_path: PathBuf,
    metadata_path: PathBuf,
}

impl std::fmt::Debug for VectorIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorIndex")
            .field("documents", &self.metadata.len())
            .field("dimension", &self.flat.dimension())
            .field("provider", &self.embedder.name())
            .field("index_path", &self.index_path)
            .finish_non_exhaustive()
    }
}

impl VectorIndex {
    /// Create a fresh, empty index. The configured dimension is the law:
    /// a provider emitting anything else is rejected at `add`.
    pub fn new(embedder: Arc<dyn IEmbeddingProvider>, config: &IndexConfig) -> Self {
        Self {
            flat: FlatIndex::new(config.dimension),
            metadata: Vec::new(),
            embedder,
            index_path: config.index_path.clone(),
            metadata_path: config.metadata_path.clone(),
        }
    }

    /// Load the persisted pair when both files exist, otherwise start fresh.
    ///
    /// A present-but-inconsistent pair is a hard error: the caller decides
    /// between `rebuild()` and starting over.
    pub fn open(embedder: Arc<dyn IEmbeddingProvider>, config: &IndexConfig) -> ScoutResult<Self> {
        if config.index_path.exists() || config.metadata_path.exists() {
            let index = Self::load(embedder, config)?;
            info!(documents = index.len(), "loaded persisted index");
            Ok(index)
        } else {
            info!("no persisted index found, starting fresh");
            Ok(Self::new(embedder, config))
        }
    }

    /// Strictly load the persisted pair. Both files must be present and
    /// mutually consistent.
    pub fn load(embedder: Arc<dyn IEmbeddingProvider>, config: &IndexConfig) -> ScoutResult<Self> {
        if !config.index_path.exists() {
            return Err(IndexError::IndexFileMissing {
                path: config.index_path.display().to_string(),
            }
            .into());
        }
        if !config.metadata_path.exists() {
            return Err(IndexError::MetadataMissing {
                path: config.metadata_path.display().to_string(),
            }
            .into());
        }

        let bytes = std::fs::read(&config.index_path).map_err(IndexError::Io)?;
        let flat = FlatIndex::from_bytes(&bytes)?;

        let raw = std::fs::read_to_string(&config.metadata_path).map_err(IndexError::Io)?;
        let metadata: Vec<IndexEntry> = serde_json::from_str(&raw)?;

        if flat.len() != metadata.len() {
            return Err(IndexError::ConsistencyFault {
                vectors: flat.len(),
                metadata: metadata.len(),
            }
            .into());
        }

        Ok(Self {
            flat,
            metadata,
            embedder,
            index_path: config.index_path.clone(),
            metadata_path: config.metadata_path.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.flat.dimension()
    }

    /// Embed and append documents. Never deduplicates — duplicate
    /// suppression belongs to the fetch orchestrator.
    ///
    /// The whole batch is validated before anything is appended, so a
    /// dimension mismatch rejects the batch without truncating it.
    pub fn add(&mut self, documents: &[Document]) -> ScoutResult<usize> {
        if documents.is_empty() {
            return Ok(0);
        }

        let texts: Vec<String> = documents.iter().map(|d| d.embedding_text()).collect();
        debug!(count = texts.len(), "embedding document batch");
        let vectors = self.embedder.embed_batch(&texts)?;

        for vector in &vectors {
            if vector.len() != self.flat.dimension() {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: self.flat.dimension(),
                    actual: vector.len(),
                }
                .into());
            }
        }

        for (document, vector) in documents.iter().zip(&vectors) {
            self.flat.push(vector);
            self.metadata.push(IndexEntry::new(document.clone()));
        }

        info!(added = documents.len(), total = self.len(), "indexed documents");
        Ok(documents.len())
    }

    /// Nearest-neighbor search over the corpus.
    ///
    /// Returns up to `top_k` hits ascending by squared-Euclidean distance.
    /// An empty index yields an empty list, not an error.
    pub fn search(
        &self,
        query: &str,
        top_k: usize,
        filter: Option<&FilterMap>,
    ) -> ScoutResult<Vec<SearchHit>> {
        if self.is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }

        let query_vector = self.embedder.embed(query)?;
        // With a filter we rank everything and skip non-matching rows,
        // so filtered-out hits don't eat into top_k.
        let scan_k = if filter.is_some() { self.len() } else { top_k };
        let ranked = self.flat.search(&query_vector, scan_k);

        let mut hits = Vec::with_capacity(top_k);
        for (ordinal, distance) in ranked {
            let document = &self.metadata[ordinal].document;
            if let Some(filters) = filter {
                if !matches_filters(document, filters) {
                    continue;
                }
            }
            hits.push(SearchHit {
                document: document.clone(),
                distance,
            });
            if hits.len() == top_k {
                break;
            }
        }

        debug!(query, hits = hits.len(), "index search complete");
        Ok(hits)
    }

    /// Persist the vector block and metadata sidecar as a pair.
    ///
    /// Each file is written to a temp sibling and renamed into place, so a
    /// crash mid-save leaves the previous pair intact.
    pub fn save(&self) -> ScoutResult<()> {
        write_atomically(&self.index_path, &self.flat.to_bytes())?;
        let json = serde_json::to_vec_pretty(&self.metadata)?;
        write_atomically(&self.metadata_path, &json)?;
        info!(documents = self.len(), "index saved");
        Ok(())
    }

    /// Re-embed every metadata document and replace the vector block.
    ///
    /// Recovery path after a provider or dimension change.
    pub fn rebuild(&mut self) -> ScoutResult<()> {
        if self.metadata.is_empty() {
            warn!("rebuild requested on empty metadata, nothing to do");
            return Ok(());
        }

        let texts: Vec<String> = self
            .metadata
            .iter()
            .map(|e| e.document.embedding_text())
            .collect();
        let vectors = self.embedder.embed_batch(&texts)?;

        let mut flat = FlatIndex::new(self.embedder.dimensions());
        for vector in &vectors {
            if vector.len() != flat.dimension() {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: flat.dimension(),
                    actual: vector.len(),
                }
                .into());
            }
            flat.push(vector);
        }

        self.flat = flat;
        info!(documents = self.len(), "index rebuilt from metadata");
        Ok(())
    }

    /// Read-only statistics: counts plus distinct sources and years.
    pub fn stats(&self) -> IndexStats {
        let sources: BTreeSet<String> = self
            .metadata
            .iter()
            .map(|e| e.document.source.clone())
            .collect();
        let years: BTreeSet<i32> = self
            .metadata
            .iter()
            .filter_map(|e| e.document.year)
            .collect();

        IndexStats {
            documents: self.len(),
            dimension: self.dimension(),
            sources: sources.into_iter().collect(),
            years: years.into_iter().collect(),
        }
    }

    /// Iterate over the stored entries (read-only).
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.metadata.iter()
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), IndexError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

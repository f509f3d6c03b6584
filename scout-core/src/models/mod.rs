pub mod document;
pub mod filter;
pub mod query;
pub mod stats;

pub use document::{Document, ScoredDocument, SearchHit};
pub use filter::FilterValue;
pub use query::{DateRange, QueryDescriptor};
pub use stats::{CacheBackendKind, CacheStats, EngineStats, IndexStats};

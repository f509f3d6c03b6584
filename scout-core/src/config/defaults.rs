//! Default values shared by the config structs.

// Index
pub const DEFAULT_DIMENSION: usize = 384;
pub const DEFAULT_INDEX_FILE: &str = "data/vector_store/index.bin";
pub const DEFAULT_METADATA_FILE: &str = "data/vector_store/metadata.json";

// Retrieval
pub const DEFAULT_TOP_K: usize = 8;

// Cache
pub const DEFAULT_CACHE_DB: &str = "data/cache.db";
pub const DEFAULT_API_TTL_SECS: u64 = 24 * 3600;
pub const DEFAULT_SUMMARY_TTL_SECS: u64 = 48 * 3600;
pub const DEFAULT_SIMILAR_TTL_SECS: u64 = 72 * 3600;
pub const DEFAULT_PROCESSED_TTL_SECS: u64 = 2 * 3600;

// Embeddings
pub const DEFAULT_L1_CACHE_SIZE: u64 = 1024;

// Fetch orchestration
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 3;
pub const DEFAULT_FETCH_DEADLINE_MS: u64 = 20_000;
pub const DEFAULT_MAX_RESULTS_PER_SOURCE: usize = 10;

//! # scout-index
//!
//! The vector index: flat exhaustive nearest-neighbor search over document
//! embeddings, with the metadata list kept strictly parallel to the vector
//! block and persisted as an atomic file pair.
//!
//! Search cost is O(n·d) per query. Acceptable at hundreds to low
//! thousands of documents; the flat store is the substitution point if an
//! approximate index is ever needed.

pub mod entry;
pub mod flat;
pub mod store;

pub use entry::IndexEntry;
pub use store::VectorIndex;

//! # scout-cache
//!
//! Namespaced key/value cache with per-namespace TTLs and lazy expiry.
//! Two interchangeable backends: a shared SQLite database (preferred,
//! survives restarts and is visible across processes) and a local
//! in-process map used when the database cannot be opened. The choice is
//! made once at construction and reported via `stats()`.

pub mod backend;
pub mod keys;
pub mod local;
pub mod service;
pub mod shared;

pub use backend::ICacheBackend;
pub use local::LocalMemoryCache;
pub use service::CacheService;
pub use shared::SharedSqliteCache;

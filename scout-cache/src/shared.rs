//! Shared cache backend over a SQLite database file.
//!
//! Visible to every process pointed at the same file, survives restarts.
//! Read/write failures after construction are logged and reported as
//! misses; only failure to open the database propagates, and that routes
//! the service to the local fallback.

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::{params, Connection};
use tracing::warn;

use scout_core::errors::CacheError;

use crate::backend::ICacheBackend;

/// SQLite-backed shared cache.
#[derive(Debug)]
pub struct SharedSqliteCache {
    conn: Mutex<Connection>,
}

impl SharedSqliteCache {
    /// Open (or create) the cache database.
    pub fn open(path: &Path) -> Result<Self, CacheError> {
        let unavailable = |e: &dyn std::fmt::Display| CacheError::BackendUnavailable {
            reason: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| unavailable(&e))?;
        }
        let conn = Connection::open(path).map_err(|e| unavailable(&e))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| unavailable(&e))?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS cache_entries (
                key        TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                expires_at INTEGER NOT NULL
            )",
            [],
        )
        .map_err(|e| unavailable(&e))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn now_millis() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

impl ICacheBackend for SharedSqliteCache {
    fn get(&self, key: &str) -> Option<String> {
        let conn = self.conn.lock().ok()?;
        let row: Option<(String, i64)> = conn
            .query_row(
                "SELECT value, expires_at FROM cache_entries WHERE key = ?1",
                params![key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .map(Some)
            .unwrap_or_else(|e| {
                if !matches!(e, rusqlite::Error::QueryReturnedNoRows) {
                    warn!(key, error = %e, "cache read failed");
                }
                None
            });

        let (value, expires_at) = row?;
        if Self::now_millis() >= expires_at {
            // Lazy purge.
            if let Err(e) = conn.execute("DELETE FROM cache_entries WHERE key = ?1", params![key]) {
                warn!(key, error = %e, "stale-entry purge failed");
            }
            return None;
        }
        Some(value)
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) {
        let expires_at = Self::now_millis() + ttl.as_millis() as i64;
        let Ok(conn) = self.conn.lock() else {
            return;
        };
        if let Err(e) = conn.execute(
            "INSERT OR REPLACE INTO cache_entries (key, value, expires_at) VALUES (?1, ?2, ?3)",
            params![key, value, expires_at],
        ) {
            warn!(key, error = %e, "cache write failed");
        }
    }

    fn remove(&self, key: &str) {
        let Ok(conn) = self.conn.lock() else {
            return;
        };
        if let Err(e) = conn.execute("DELETE FROM cache_entries WHERE key = ?1", params![key]) {
            warn!(key, error = %e, "cache delete failed");
        }
    }

    fn len(&self) -> usize {
        let Ok(conn) = self.conn.lock() else {
            return 0;
        };
        conn.query_row("SELECT COUNT(*) FROM cache_entries", [], |row| {
            row.get::<_, i64>(0)
        })
        .map(|n| n as usize)
        .unwrap_or(0)
    }
}

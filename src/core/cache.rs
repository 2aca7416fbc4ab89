//! Collection cache - snapshot-per-key reads with explicit invalidation
//!
//! Each entity collection is cached as one JSON snapshot under a typed key.
//! A snapshot older than the TTL counts as a miss. The cache is advisory:
//! a failed write or removal only means the next read goes to the API.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Typed key naming one cached collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheKey(&'static str);

impl CacheKey {
    pub const TENPISTAS: CacheKey = CacheKey("tenpistas");
    pub const TRANSACTIONS: CacheKey = CacheKey("transactions");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize)]
struct CacheEntry<T> {
    fetched_at: DateTime<Utc>,
    items: Vec<T>,
}

#[derive(Serialize)]
struct CacheEntryRef<'a, T> {
    fetched_at: DateTime<Utc>,
    items: &'a [T],
}

/// On-disk cache of collection snapshots
pub struct CollectionCache {
    dir: PathBuf,
    ttl_secs: u64,
}

impl CollectionCache {
    pub fn new(dir: PathBuf, ttl_secs: u64) -> Self {
        Self { dir, ttl_secs }
    }

    fn entry_path(&self, key: CacheKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }

    /// Load a fresh snapshot; stale, missing, or unreadable entries are misses
    pub fn load<T: DeserializeOwned>(&self, key: CacheKey) -> Option<Vec<T>> {
        let content = fs::read_to_string(self.entry_path(key)).ok()?;
        let entry: CacheEntry<T> = serde_json::from_str(&content).ok()?;

        let age = Utc::now().signed_duration_since(entry.fetched_at);
        if age > chrono::Duration::seconds(self.ttl_secs as i64) || age < chrono::Duration::zero()
        {
            return None;
        }
        Some(entry.items)
    }

    /// Whether a fresh snapshot exists for `key`
    pub fn contains(&self, key: CacheKey) -> bool {
        self.load::<serde_json::Value>(key).is_some()
    }

    /// Replace the snapshot for `key`, stamped with the current time
    pub fn store<T: Serialize>(&self, key: CacheKey, items: &[T]) {
        let entry = CacheEntryRef {
            fetched_at: Utc::now(),
            items,
        };
        if fs::create_dir_all(&self.dir).is_err() {
            return;
        }
        if let Ok(json) = serde_json::to_string(&entry) {
            let _ = fs::write(self.entry_path(key), json);
        }
    }

    /// Drop the snapshot for `key` so the next read refetches
    pub fn invalidate(&self, key: CacheKey) {
        let _ = fs::remove_file(self.entry_path(key));
    }
}

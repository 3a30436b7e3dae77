//! Dashboard snapshot cache
//!
//! Memoizes the last computed snapshot for a short time-to-live. The key
//! captures everything the computation depends on: the store's data
//! version, the date range, the reference date, and the engine
//! configuration. Correctness never depends on the cache; a stale or
//! mismatched entry simply recomputes.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::NaiveDate;

use super::snapshot::{DashboardSnapshot, EngineConfig};

/// Cache key: the full set of snapshot inputs
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotKey {
    /// Store version at computation time (append-only row count)
    pub data_version: u64,
    /// Range start
    pub start: NaiveDate,
    /// Range end
    pub end: NaiveDate,
    /// Reference date for the current-week window
    pub today: NaiveDate,
    /// Engine configuration
    pub config: EngineConfig,
}

struct CacheEntry {
    key: SnapshotKey,
    snapshot: DashboardSnapshot,
    stored_at: Instant,
}

/// Single-entry TTL cache for dashboard snapshots
pub struct SnapshotCache {
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl SnapshotCache {
    /// Create a cache with the given time-to-live
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// Get the cached snapshot if the key matches and the entry is fresh
    pub fn get(&self, key: &SnapshotKey) -> Option<DashboardSnapshot> {
        let guard = self.entry.lock().ok()?;
        let entry = guard.as_ref()?;

        if entry.key == *key && entry.stored_at.elapsed() <= self.ttl {
            Some(entry.snapshot.clone())
        } else {
            None
        }
    }

    /// Store a snapshot, replacing any previous entry
    pub fn put(&self, key: SnapshotKey, snapshot: DashboardSnapshot) {
        if let Ok(mut guard) = self.entry.lock() {
            *guard = Some(CacheEntry {
                key,
                snapshot,
                stored_at: Instant::now(),
            });
        }
    }
}

//! TTL cache for the normalized sheet table.
//!
//! The load operation takes no parameters, so the cache holds at most one
//! entry. An entry older than its TTL is recomputed on next access;
//! `invalidate` forces recomputation regardless of age. Single-consumer
//! access model — the table is read-only once built, so no locking.

use std::time::{Duration, Instant};

use super::provider::DataError;
use crate::domain::Table;

/// Default freshness window for the dashboard's data.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

#[derive(Debug)]
struct CacheEntry {
    table: Table,
    loaded_at: Instant,
}

/// The cache. Owns the current table; callers borrow it read-only.
#[derive(Debug)]
pub struct SheetCache {
    ttl: Duration,
    entry: Option<CacheEntry>,
}

impl SheetCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Age of the stored entry, if any.
    pub fn age(&self) -> Option<Duration> {
        self.entry.as_ref().map(|e| e.loaded_at.elapsed())
    }

    /// True when an entry exists and is within its TTL.
    pub fn is_fresh(&self) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|e| e.loaded_at.elapsed() <= self.ttl)
    }

    /// Return the cached table, invoking `loader` first if the cache is
    /// empty or stale. A failed load leaves the cache empty.
    pub fn get_or_load<F>(&mut self, loader: F) -> Result<&Table, DataError>
    where
        F: FnOnce() -> Result<Table, DataError>,
    {
        let entry = match self.entry.take() {
            Some(entry) if entry.loaded_at.elapsed() <= self.ttl => entry,
            _ => CacheEntry {
                table: loader()?,
                loaded_at: Instant::now(),
            },
        };
        Ok(&self.entry.insert(entry).table)
    }

    /// Unconditionally discard the stored entry; the next `get_or_load`
    /// recomputes regardless of age.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

impl Default for SheetCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

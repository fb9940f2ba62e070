//! Cache entry type

use std::time::{Duration, Instant};

/// A cached value with the metadata the eviction heuristic needs
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The cached value
    pub value: T,
    /// When the entry was inserted; never refreshed by reads
    pub created_at: Instant,
    /// Number of valid reads, starting at 1 on insertion
    pub access_count: u64,
}

impl<T> CacheEntry<T> {
    /// Create a fresh entry stamped at `now`
    pub fn new(value: T, now: Instant) -> Self {
        Self {
            value,
            created_at: now,
            access_count: 1,
        }
    }

    /// Age of the entry as seen at `now`
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Check if entry has expired under a strict TTL
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) >= ttl
    }

    /// Record a valid read
    pub fn touch(&mut self) {
        self.access_count += 1;
    }
}

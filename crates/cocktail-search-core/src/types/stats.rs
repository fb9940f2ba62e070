//! Cache statistics

use serde::Serialize;

/// Statistics for a single cache collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses (including expired lookups)
    pub misses: u64,
    /// Number of write operations
    pub writes: u64,
    /// Number of entries removed by capacity eviction
    pub evictions: u64,
    /// Number of entries removed because they were found expired
    pub expirations: u64,
    /// Current number of entries
    pub size: usize,
    /// Sum of access counts over the live entries
    pub total_accesses: u64,
}

impl CacheStats {
    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

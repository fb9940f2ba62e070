//! Cache lookup result type

/// Result of a cache lookup
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    /// Fresh entry found
    Hit(T),
    /// No entry for the key
    Miss,
    /// Entry was past its TTL and has been removed
    Expired,
}

impl<T> CacheResult<T> {
    /// Check if this is a fresh hit
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheResult::Hit(_))
    }

    /// Check if this is a miss of either kind
    pub fn is_miss(&self) -> bool {
        !self.is_hit()
    }
}

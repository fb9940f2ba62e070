//! Metrics trait for cache observability

/// Which of the two cache collections an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// Recipes keyed by numeric id
    Recipes,
    /// Arbitrary query results keyed by string signature
    Results,
}

impl CollectionKind {
    /// Get collection as string label
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Recipes => "recipes",
            CollectionKind::Results => "results",
        }
    }
}

/// Reason an entry left a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvictionReason {
    /// Found past its TTL on lookup
    Expired,
    /// Removed by the capacity sweep
    Capacity,
    /// Removed by an explicit clear
    Cleared,
}

impl EvictionReason {
    /// Get reason as string label
    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionReason::Expired => "expired",
            EvictionReason::Capacity => "capacity",
            EvictionReason::Cleared => "cleared",
        }
    }
}

/// Trait for cache metrics/observability
///
/// Implement this to integrate with your metrics system (Prometheus, StatsD, etc.)
pub trait CacheMetrics: Send + Sync + 'static {
    /// Record a cache hit
    fn record_hit(&self, collection: CollectionKind);

    /// Record a cache miss
    fn record_miss(&self, collection: CollectionKind);

    /// Record entries leaving a collection
    fn record_eviction(&self, collection: CollectionKind, reason: EvictionReason, count: usize);

    /// Record collection size after a write
    fn record_size(&self, collection: CollectionKind, size: usize);
}

/// No-op metrics implementation (default)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl CacheMetrics for NoopMetrics {
    #[inline]
    fn record_hit(&self, _collection: CollectionKind) {}

    #[inline]
    fn record_miss(&self, _collection: CollectionKind) {}

    #[inline]
    fn record_eviction(&self, _collection: CollectionKind, _reason: EvictionReason, _count: usize) {
    }

    #[inline]
    fn record_size(&self, _collection: CollectionKind, _size: usize) {}
}

/// Metrics adapter using the `metrics` crate
///
/// # Example
/// ```ignore
/// use cocktail_search_core::MetricsCrateAdapter;
///
/// let metrics = MetricsCrateAdapter::new("cocktail_cache");
/// // Emits: cocktail_cache_hits_total{collection="recipes"}, ...
/// ```
#[cfg(feature = "metrics")]
#[derive(Debug, Clone)]
pub struct MetricsCrateAdapter {
    prefix: String,
}

#[cfg(feature = "metrics")]
impl MetricsCrateAdapter {
    /// Create a new adapter with the given metric name prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn metric_name(&self, name: &str) -> String {
        format!("{}_{}", self.prefix, name)
    }
}

#[cfg(feature = "metrics")]
impl CacheMetrics for MetricsCrateAdapter {
    fn record_hit(&self, collection: CollectionKind) {
        metrics::counter!(self.metric_name("hits_total"), "collection" => collection.as_str())
            .increment(1);
    }

    fn record_miss(&self, collection: CollectionKind) {
        metrics::counter!(self.metric_name("misses_total"), "collection" => collection.as_str())
            .increment(1);
    }

    fn record_eviction(&self, collection: CollectionKind, reason: EvictionReason, count: usize) {
        metrics::counter!(
            self.metric_name("evictions_total"),
            "collection" => collection.as_str(),
            "reason" => reason.as_str()
        )
        .increment(count as u64);
    }

    fn record_size(&self, collection: CollectionKind, size: usize) {
        metrics::gauge!(self.metric_name("entries"), "collection" => collection.as_str())
            .set(size as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_as_str() {
        assert_eq!(CollectionKind::Recipes.as_str(), "recipes");
        assert_eq!(CollectionKind::Results.as_str(), "results");
    }

    #[test]
    fn test_eviction_reason_as_str() {
        assert_eq!(EvictionReason::Expired.as_str(), "expired");
        assert_eq!(EvictionReason::Capacity.as_str(), "capacity");
        assert_eq!(EvictionReason::Cleared.as_str(), "cleared");
    }

    #[test]
    fn test_noop_metrics() {
        let metrics = NoopMetrics;
        metrics.record_hit(CollectionKind::Recipes);
        metrics.record_miss(CollectionKind::Results);
        metrics.record_eviction(CollectionKind::Results, EvictionReason::Capacity, 3);
        metrics.record_size(CollectionKind::Recipes, 10);
    }
}

use crate::{CacheMetrics, CollectionKind, EvictionReason};
use tracing::{debug, trace};

/// Metrics adapter that logs events via `tracing`
#[derive(Debug, Clone, Default)]
pub struct TracingMetrics {
    /// Service name/prefix (optional)
    service_name: Option<String>,
}

impl TracingMetrics {
    /// Create new tracing metrics adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with service name prefix
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }
}

impl CacheMetrics for TracingMetrics {
    fn record_hit(&self, collection: CollectionKind) {
        trace!(
            target: "cocktail_search",
            event = "hit",
            collection = collection.as_str(),
            service = ?self.service_name,
            "Cache Hit"
        );
    }

    fn record_miss(&self, collection: CollectionKind) {
        trace!(
            target: "cocktail_search",
            event = "miss",
            collection = collection.as_str(),
            service = ?self.service_name,
            "Cache Miss"
        );
    }

    fn record_eviction(&self, collection: CollectionKind, reason: EvictionReason, count: usize) {
        debug!(
            target: "cocktail_search",
            event = "eviction",
            collection = collection.as_str(),
            reason = reason.as_str(),
            count = count,
            service = ?self.service_name,
            "Cache Eviction"
        );
    }

    fn record_size(&self, collection: CollectionKind, size: usize) {
        trace!(
            target: "cocktail_search",
            event = "size",
            collection = collection.as_str(),
            size = size,
            service = ?self.service_name,
            "Cache Size Update"
        );
    }
}

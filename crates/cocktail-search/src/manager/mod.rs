//! High-level cache manager

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use cocktail_search_core::{
    CacheKey, CacheMetrics, CacheResult, CacheStats, Clock, CollectionKind, EvictionReason,
    NoopMetrics, Result, SystemClock,
};
use cocktail_search_storage::{CacheConfig, MemoryCache};

mod read_through;
pub use read_through::Loader;

/// Statistics for both collections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManagerStats {
    pub recipes: CacheStats,
    pub results: CacheStats,
}

/// Owner of the two cache collections
///
/// Recipes are keyed by their numeric id; query results by any [`CacheKey`]
/// (typically the merged `SearchArgs`). Both collections share one
/// [`CacheConfig`]. Lookups and stores never fail: a miss is the normal
/// path and callers must not rely on cache contents for correctness.
///
/// Generic over:
/// - `R`: recipe payload
/// - `Q`: query-result payload
/// - `M`: the metrics collector
/// - `C`: the clock
///
/// Cloning creates a new handle to the SAME underlying collections.
pub struct CacheManager<R = Value, Q = Value, M = NoopMetrics, C = SystemClock>
where
    M: CacheMetrics,
    C: Clock,
{
    recipes: MemoryCache<u64, R, C>,
    results: MemoryCache<String, Q, C>,
    metrics: Arc<M>,
    config: CacheConfig,
}

// Constructors for the system clock and no metrics
impl<R: Clone, Q: Clone> CacheManager<R, Q, NoopMetrics, SystemClock> {
    /// Create a manager, rejecting an unusable configuration
    pub fn new(config: CacheConfig) -> Result<Self> {
        Self::with_clock_and_metrics(config, SystemClock, NoopMetrics)
    }

    /// Create with the default 5 minute TTL and 1000 entries per collection
    pub fn with_defaults() -> Self {
        let config = CacheConfig::default();
        Self::build(config, SystemClock, NoopMetrics)
    }
}

impl<R, Q, M, C> CacheManager<R, Q, M, C>
where
    R: Clone,
    Q: Clone,
    M: CacheMetrics,
    C: Clock + Clone,
{
    /// Create a manager with a custom clock and metrics collector
    pub fn with_clock_and_metrics(config: CacheConfig, clock: C, metrics: M) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, clock, metrics))
    }

    fn build(config: CacheConfig, clock: C, metrics: M) -> Self {
        Self {
            recipes: MemoryCache::with_clock(config.clone(), clock.clone()),
            results: MemoryCache::with_clock(config.clone(), clock),
            metrics: Arc::new(metrics),
            config,
        }
    }
}

impl<R, Q, M, C> CacheManager<R, Q, M, C>
where
    R: Clone,
    Q: Clone,
    M: CacheMetrics,
    C: Clock,
{
    /// Configuration shared by both collections
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Get a recipe by id
    pub fn get_recipe(&self, id: u64) -> Option<R> {
        let result = self.recipes.get(&id);
        self.observe(CollectionKind::Recipes, result)
    }

    /// Store a recipe by id
    pub fn set_recipe(&self, id: u64, recipe: R) {
        let evicted = self.recipes.set(id, recipe);
        self.after_write(CollectionKind::Recipes, evicted, self.recipes.len());
    }

    /// Get a cached query result
    pub fn get_result(&self, key: impl CacheKey) -> Option<Q> {
        let result = self.results.get(key.full_key().as_str());
        self.observe(CollectionKind::Results, result)
    }

    /// Store a query result
    pub fn set_result(&self, key: impl CacheKey, value: Q) {
        let evicted = self.results.set(key.full_key(), value);
        self.after_write(CollectionKind::Results, evicted, self.results.len());
    }

    /// Empty both collections; cumulative counters are kept
    pub fn clear(&self) {
        let recipes = self.recipes.clear();
        let results = self.results.clear();

        self.metrics
            .record_eviction(CollectionKind::Recipes, EvictionReason::Cleared, recipes);
        self.metrics
            .record_eviction(CollectionKind::Results, EvictionReason::Cleared, results);
        debug!(target: "cocktail_search", recipes, results, "cache cleared");
    }

    /// Diagnostic statistics for both collections
    pub fn stats(&self) -> ManagerStats {
        ManagerStats {
            recipes: self.recipes.stats(),
            results: self.results.stats(),
        }
    }

    /// Direct access to the recipe collection
    pub fn recipes(&self) -> &MemoryCache<u64, R, C> {
        &self.recipes
    }

    /// Direct access to the query-result collection
    pub fn results(&self) -> &MemoryCache<String, Q, C> {
        &self.results
    }

    fn observe<T>(&self, collection: CollectionKind, result: CacheResult<T>) -> Option<T> {
        match result {
            CacheResult::Hit(value) => {
                self.metrics.record_hit(collection);
                Some(value)
            }
            CacheResult::Expired => {
                self.metrics.record_miss(collection);
                self.metrics
                    .record_eviction(collection, EvictionReason::Expired, 1);
                None
            }
            CacheResult::Miss => {
                self.metrics.record_miss(collection);
                None
            }
        }
    }

    fn after_write(&self, collection: CollectionKind, evicted: usize, size: usize) {
        if evicted > 0 {
            self.metrics
                .record_eviction(collection, EvictionReason::Capacity, evicted);
        }
        self.metrics.record_size(collection, size);
    }
}

impl<R: Clone, Q: Clone> Default for CacheManager<R, Q, NoopMetrics, SystemClock> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<R, Q, M, C> Clone for CacheManager<R, Q, M, C>
where
    M: CacheMetrics,
    C: Clock + Clone,
{
    fn clone(&self) -> Self {
        Self {
            recipes: self.recipes.clone(),
            results: self.results.clone(),
            metrics: self.metrics.clone(),
            config: self.config.clone(),
        }
    }
}

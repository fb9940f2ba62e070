//! Bounded, strictly expiring in-memory collection

use parking_lot::Mutex;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

use cocktail_search_core::{CacheEntry, CacheResult, CacheStats, Clock, SystemClock};

use super::config::CacheConfig;
use super::eviction::{eviction_batch_size, select_victims};

/// Cumulative counters, kept across clears
#[derive(Debug, Default)]
struct Counters {
    hits: u64,
    misses: u64,
    writes: u64,
    evictions: u64,
    expirations: u64,
}

#[derive(Debug)]
struct Inner<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    counters: Counters,
}

/// One cache collection
///
/// Lookups expire lazily: a stale entry is only removed when it is read.
/// Every `get` and every `set` (including its eviction sweep) runs under a
/// single lock, so the scoring snapshot can never go stale mid-sweep.
/// Cloning creates a new handle to the SAME underlying store.
pub struct MemoryCache<K, V, C = SystemClock> {
    inner: Arc<Mutex<Inner<K, V>>>,
    config: CacheConfig,
    clock: C,
}

impl<K, V> MemoryCache<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a collection on the system clock
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl<K, V, C> MemoryCache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    /// Create a collection driven by the given clock
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: HashMap::with_capacity(config.max_size.min(10_000)),
                counters: Counters::default(),
            })),
            config,
            clock,
        }
    }

    /// Configuration this collection was built with
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Look up a key
    ///
    /// A fresh entry has its access count bumped and its value cloned out.
    /// An entry at or past the TTL is deleted and reported as `Expired`.
    /// Reads never extend an entry's life.
    pub fn get<Q>(&self, key: &Q) -> CacheResult<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        match inner.entries.get_mut(key) {
            None => {
                inner.counters.misses += 1;
                return CacheResult::Miss;
            }
            Some(entry) if !entry.is_expired(now, self.config.ttl) => {
                entry.touch();
                inner.counters.hits += 1;
                return CacheResult::Hit(entry.value.clone());
            }
            Some(_) => {}
        }

        inner.entries.remove(key);
        inner.counters.misses += 1;
        inner.counters.expirations += 1;
        trace!(target: "cocktail_search", "expired entry removed on lookup");
        CacheResult::Expired
    }

    /// Insert or overwrite a key
    ///
    /// Runs the eviction check first; a full collection drops its coldest
    /// batch even when `key` is already present. The stored entry always
    /// starts fresh with an access count of 1.
    ///
    /// Returns the number of entries evicted to make room.
    pub fn set(&self, key: K, value: V) -> usize {
        let now = self.clock.now();
        let mut inner = self.inner.lock();

        let evicted = self.evict_if_full(&mut inner, now);

        inner.entries.insert(key, CacheEntry::new(value, now));
        inner.counters.writes += 1;
        evicted
    }

    /// Snapshot an entry without counting it as a read
    ///
    /// Expired entries are reported as absent but left in place.
    pub fn peek<Q>(&self, key: &Q) -> Option<CacheEntry<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now();
        let inner = self.inner.lock();
        inner
            .entries
            .get(key)
            .filter(|entry| !entry.is_expired(now, self.config.ttl))
            .cloned()
    }

    /// Remove every entry, returning how many were dropped
    pub fn clear(&self) -> usize {
        let mut inner = self.inner.lock();
        let removed = inner.entries.len();
        inner.entries.clear();
        removed
    }

    /// Current statistics
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            hits: inner.counters.hits,
            misses: inner.counters.misses,
            writes: inner.counters.writes,
            evictions: inner.counters.evictions,
            expirations: inner.counters.expirations,
            size: inner.entries.len(),
            total_accesses: inner.entries.values().map(|e| e.access_count).sum(),
        }
    }

    /// Number of entries, including not-yet-collected stale ones
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn evict_if_full(&self, inner: &mut Inner<K, V>, now: Instant) -> usize {
        // Only evict if we're at or over capacity
        if inner.entries.len() < self.config.max_size {
            return 0;
        }

        let batch = eviction_batch_size(self.config.max_size);
        let victims = select_victims(inner.entries.iter(), now, batch);

        for key in &victims {
            inner.entries.remove(key);
        }
        inner.counters.evictions += victims.len() as u64;

        debug!(
            target: "cocktail_search",
            evicted = victims.len(),
            max_size = self.config.max_size,
            "capacity sweep"
        );
        victims.len()
    }
}

impl<K, V, C: Clone> Clone for MemoryCache<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            config: self.config.clone(),
            clock: self.clock.clone(),
        }
    }
}

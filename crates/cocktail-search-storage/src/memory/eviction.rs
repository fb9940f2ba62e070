//! Capacity eviction heuristic
//!
//! When a collection is full, every entry is scored by `access_count / age`
//! and the coldest quarter of the capacity is dropped in one batch.

use std::time::{Duration, Instant};

use cocktail_search_core::CacheEntry;

/// Fraction of `max_size` removed per sweep
pub const EVICTION_FRACTION: f64 = 0.25;

/// Ages below this are clamped before scoring so fresh entries do not
/// divide by (nearly) zero
pub const MIN_SCORING_AGE: Duration = Duration::from_millis(1);

/// Score an entry; lower means colder
pub fn eviction_score(access_count: u64, age: Duration) -> f64 {
    access_count as f64 / age.max(MIN_SCORING_AGE).as_secs_f64()
}

/// Number of entries removed by one sweep over a full collection
///
/// `floor(max_size * 0.25)`, but never zero so a full collection always
/// makes room.
pub fn eviction_batch_size(max_size: usize) -> usize {
    ((max_size as f64 * EVICTION_FRACTION).floor() as usize).max(1)
}

/// Pick the `count` lowest-scored keys
///
/// Ties go to the older entry first.
pub fn select_victims<'a, K, V, I>(entries: I, now: Instant, count: usize) -> Vec<K>
where
    K: Clone + 'a,
    V: 'a,
    I: IntoIterator<Item = (&'a K, &'a CacheEntry<V>)>,
{
    if count == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, Instant, &K)> = entries
        .into_iter()
        .map(|(key, entry)| {
            (
                eviction_score(entry.access_count, entry.age(now)),
                entry.created_at,
                key,
            )
        })
        .collect();

    scored.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    scored
        .into_iter()
        .take(count)
        .map(|(_, _, key)| key.clone())
        .collect()
}

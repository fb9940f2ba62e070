//! Integration tests for CacheManager

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::{CollectionKind, EvictionReason, ManualClock, NoopMetrics, Strength};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Recipe {
        id: u64,
        name: String,
        glass: String,
    }

    fn negroni() -> Recipe {
        Recipe {
            id: 11003,
            name: "Negroni".to_string(),
            glass: "rocks".to_string(),
        }
    }

    type ManualCache = CacheManager<Recipe, Value, NoopMetrics, ManualClock>;

    fn manual_cache(config: CacheConfig) -> (ManualCache, ManualClock) {
        let clock = ManualClock::new();
        let cache =
            CacheManager::with_clock_and_metrics(config, clock.clone(), NoopMetrics).unwrap();
        (cache, clock)
    }

    #[derive(Default)]
    struct Recorded {
        hits: AtomicU64,
        misses: AtomicU64,
        capacity_evictions: AtomicUsize,
        expirations: AtomicUsize,
        cleared: AtomicUsize,
    }

    #[derive(Clone, Default)]
    struct RecordingMetrics(Arc<Recorded>);

    impl std::ops::Deref for RecordingMetrics {
        type Target = Recorded;

        fn deref(&self) -> &Recorded {
            &self.0
        }
    }

    impl crate::CacheMetrics for RecordingMetrics {
        fn record_hit(&self, _collection: CollectionKind) {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }

        fn record_miss(&self, _collection: CollectionKind) {
            self.misses.fetch_add(1, Ordering::SeqCst);
        }

        fn record_eviction(
            &self,
            _collection: CollectionKind,
            reason: EvictionReason,
            count: usize,
        ) {
            let counter = match reason {
                EvictionReason::Capacity => &self.capacity_evictions,
                EvictionReason::Expired => &self.expirations,
                EvictionReason::Cleared => &self.cleared,
            };
            counter.fetch_add(count, Ordering::SeqCst);
        }

        fn record_size(&self, _collection: CollectionKind, _size: usize) {}
    }

    #[test]
    fn test_basic_get_set() {
        let cache: CacheManager<Recipe> = CacheManager::with_defaults();
        cache.set_recipe(11003, negroni());

        assert_eq!(cache.get_recipe(11003), Some(negroni()));
    }

    #[test]
    fn test_cache_miss() {
        let cache: CacheManager = CacheManager::with_defaults();
        assert_eq!(cache.get_recipe(42), None);
        assert_eq!(cache.get_result("search:nothing"), None);

        let stats = cache.stats();
        assert_eq!(stats.recipes.misses, 1);
        assert_eq!(stats.results.misses, 1);
    }

    #[test]
    fn test_collections_are_independent() {
        let cache: CacheManager<String, String> = CacheManager::with_defaults();
        cache.set_recipe(1, "recipe".into());
        cache.set_result("1", "result".into());

        assert_eq!(cache.get_recipe(1).as_deref(), Some("recipe"));
        assert_eq!(cache.get_result("1").as_deref(), Some("result"));
        assert_eq!(cache.stats().recipes.size, 1);
        assert_eq!(cache.stats().results.size, 1);
    }

    #[test]
    fn test_access_count_starts_at_one() {
        let (cache, _clock) = manual_cache(CacheConfig::default());
        cache.set_recipe(1, negroni());
        assert_eq!(cache.recipes().peek(&1u64).unwrap().access_count, 1);

        for expected in 2..=4 {
            cache.get_recipe(1);
            assert_eq!(cache.recipes().peek(&1u64).unwrap().access_count, expected);
        }
    }

    #[test]
    fn test_strict_ttl() {
        let ttl = Duration::from_secs(300);
        let (cache, clock) = manual_cache(CacheConfig::with_ttl(ttl));
        cache.set_result("search:gin", json!(["Gimlet"]));

        clock.advance(ttl - Duration::from_millis(1));
        assert_eq!(cache.get_result("search:gin"), Some(json!(["Gimlet"])));
        assert_eq!(cache.stats().results.size, 1);

        clock.advance(Duration::from_millis(2));
        assert_eq!(cache.get_result("search:gin"), None);
        assert_eq!(cache.stats().results.size, 0);
        assert_eq!(cache.stats().results.expirations, 1);
    }

    #[test]
    fn test_capacity_sweep_on_full_collection() {
        let (cache, clock) = manual_cache(CacheConfig::with_max_size(20));
        for id in 0..20 {
            cache.set_recipe(id, negroni());
            clock.advance(Duration::from_millis(100));
        }
        // Keep the oldest five warm so they outscore the rest
        for id in 0..5 {
            for _ in 0..50 {
                cache.get_recipe(id);
            }
        }
        clock.advance(Duration::from_secs(1));

        cache.set_recipe(100, negroni());

        // floor(20 * 0.25) removed, then one inserted
        let stats = cache.stats().recipes;
        assert_eq!(stats.size, 20 - 5 + 1);
        assert_eq!(stats.evictions, 5);

        // The cold entries inserted first (ids 5..10) are the lowest scored
        for id in 5..10u64 {
            assert!(cache.recipes().peek(&id).is_none(), "{id} should be evicted");
        }
        for id in (0..5u64).chain(10..20).chain([100]) {
            assert!(cache.recipes().peek(&id).is_some(), "{id} should survive");
        }
    }

    #[test]
    fn test_clear_empties_both() {
        let cache: CacheManager<Recipe, Value> = CacheManager::with_defaults();
        cache.set_recipe(1, negroni());
        cache.set_result("a", json!(1));
        cache.set_result("b", json!(2));

        cache.clear();

        let stats = cache.stats();
        assert_eq!(stats.recipes.size, 0);
        assert_eq!(stats.results.size, 0);
        assert_eq!(cache.get_recipe(1), None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result: Result<CacheManager> = CacheManager::new(CacheConfig::with_max_size(0));
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_clones_share_collections() {
        let cache: CacheManager<Recipe> = CacheManager::with_defaults();
        let handle = cache.clone();
        handle.set_recipe(1, negroni());
        assert!(cache.get_recipe(1).is_some());
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_tracing_metrics_manager() {
        let cache: CacheManager<u64, u64, crate::TracingMetrics, ManualClock> =
            CacheManager::with_clock_and_metrics(
                CacheConfig::with_max_size(2),
                ManualClock::new(),
                crate::TracingMetrics::new().with_service_name("cocktails"),
            )
            .unwrap();

        cache.set_recipe(1, 10);
        cache.set_recipe(2, 20);
        cache.set_recipe(3, 30);

        assert_eq!(cache.get_recipe(3), Some(30));
        assert_eq!(cache.stats().recipes.evictions, 1);
    }

    #[test]
    fn test_metrics_observe_events() {
        let metrics = RecordingMetrics::default();
        let clock = ManualClock::new();
        let cache: CacheManager<u32, u32, RecordingMetrics, ManualClock> =
            CacheManager::with_clock_and_metrics(
                CacheConfig::with_max_size(4).ttl(Duration::from_secs(10)),
                clock.clone(),
                metrics.clone(),
            )
            .unwrap();

        for id in 0..4 {
            cache.set_recipe(id, 0);
            clock.advance(Duration::from_secs(1));
        }
        cache.get_recipe(3);
        cache.get_recipe(99);
        cache.set_recipe(4, 0); // sweep of one

        clock.advance(Duration::from_secs(10));
        cache.get_recipe(4); // expired

        cache.set_result("x", 1);
        cache.clear();

        assert_eq!(metrics.hits.load(Ordering::SeqCst), 1);
        assert_eq!(metrics.misses.load(Ordering::SeqCst), 2);
        assert_eq!(metrics.capacity_evictions.load(Ordering::SeqCst), 1);
        assert_eq!(metrics.expirations.load(Ordering::SeqCst), 1);
        // Three recipes remained plus one result
        assert_eq!(metrics.cleared.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_enriched_args_key_results() {
        let cache: CacheManager = CacheManager::with_defaults();
        let parser = QueryParser::new();

        let explicit = SearchArgs {
            preferred_strength: Some("strong".into()),
            ..Default::default()
        };
        let merged = parser.enrich("something light and bitter", &explicit);
        assert_eq!(merged.preferred_strength.as_deref(), Some("strong"));
        assert_eq!(parse("something light").strength, Some(Strength::Light));

        cache.set_result(&merged, json!({ "drinks": ["Negroni"] }));

        // Re-deriving from the same inputs hits the same entry
        let again = parser.enrich("something light and bitter", &explicit);
        assert_eq!(
            cache.get_result(&again),
            Some(json!({ "drinks": ["Negroni"] }))
        );
    }

    struct ApiStub {
        calls: AtomicUsize,
        fail: bool,
    }

    impl ApiStub {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Loader<u64, Recipe> for ApiStub {
        async fn load(&self, id: &u64) -> Result<Option<Recipe>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CacheError::loader("upstream returned 503"));
            }
            Ok((*id == 11003).then(negroni))
        }
    }

    #[async_trait]
    impl Loader<SearchArgs, Value> for ApiStub {
        async fn load(&self, args: &SearchArgs) -> Result<Option<Value>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(json!({ "spirit": args.spirit })))
        }
    }

    #[tokio::test]
    async fn test_read_through_loads_once() {
        let (cache, _clock) = manual_cache(CacheConfig::default());
        let api = ApiStub::new();

        let first = cache.get_or_load_recipe(11003, &api).await.unwrap();
        let second = cache.get_or_load_recipe(11003, &api).await.unwrap();

        assert_eq!(first, Some(negroni()));
        assert_eq!(second, Some(negroni()));
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn test_read_through_reloads_after_expiry() {
        let (cache, clock) = manual_cache(CacheConfig::with_ttl(Duration::from_secs(60)));
        let api = ApiStub::new();

        cache.get_or_load_recipe(11003, &api).await.unwrap();
        clock.advance(Duration::from_secs(61));
        cache.get_or_load_recipe(11003, &api).await.unwrap();

        assert_eq!(api.calls(), 2);
    }

    #[tokio::test]
    async fn test_read_through_does_not_cache_absent() {
        let (cache, _clock) = manual_cache(CacheConfig::default());
        let api = ApiStub::new();

        assert_eq!(cache.get_or_load_recipe(1, &api).await.unwrap(), None);
        assert_eq!(cache.get_or_load_recipe(1, &api).await.unwrap(), None);
        assert_eq!(api.calls(), 2);
        assert_eq!(cache.stats().recipes.size, 0);
    }

    #[tokio::test]
    async fn test_read_through_propagates_errors() {
        let (cache, _clock) = manual_cache(CacheConfig::default());
        let api = ApiStub::failing();

        let err = cache.get_or_load_recipe(11003, &api).await.unwrap_err();
        assert!(matches!(err, CacheError::Loader(_)));
        assert_eq!(cache.stats().recipes.size, 0);
    }

    #[test]
    fn test_read_through_hit_skips_loader() {
        let (cache, _clock) = manual_cache(CacheConfig::default());
        let api = ApiStub::failing();
        cache.set_recipe(11003, negroni());

        let recipe = tokio_test::block_on(cache.get_or_load_recipe(11003, &api)).unwrap();
        assert_eq!(recipe, Some(negroni()));
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_read_through_results_keyed_by_args() {
        let (cache, _clock) = manual_cache(CacheConfig::default());
        let api = ApiStub::new();
        let args = QueryParser::new().enrich("a gin sour", &SearchArgs::default());

        let loaded = cache.get_or_load_result(args.clone(), &api).await.unwrap();
        assert_eq!(loaded, Some(json!({ "spirit": "gin" })));

        let cached = cache.get_or_load_result(args.clone(), &api).await.unwrap();
        assert_eq!(cached, loaded);
        assert_eq!(api.calls(), 1);
        assert_eq!(cache.get_result(&args), loaded);
    }
}

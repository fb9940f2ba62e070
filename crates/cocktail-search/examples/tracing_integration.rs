use cocktail_search::TracingMetrics;
use cocktail_search::prelude::*;
use cocktail_search::{ManualClock, NoopMetrics};
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // 1. Initialize tracing subscriber
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE) // Enable TRACE to see hits and misses
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    println!("🔍 Initialized tracing...");

    // 2. Small cache on a manual clock so eviction and expiry show up quickly
    let clock = ManualClock::new();
    let metrics = TracingMetrics::new().with_service_name("cocktail-front-end");
    let config = CacheConfig::with_max_size(4).ttl(Duration::from_secs(30));
    let cache: CacheManager<String, String, TracingMetrics, ManualClock> =
        CacheManager::with_clock_and_metrics(config, clock.clone(), metrics)?;

    println!("\n⚡ Filling the recipe cache...");
    for (id, name) in [(1, "Negroni"), (2, "Daiquiri"), (3, "Sazerac"), (4, "Gimlet")] {
        cache.set_recipe(id, name.to_string());
        clock.advance(Duration::from_secs(1));
    }
    cache.get_recipe(1);

    println!("\n⚡ Inserting past capacity (sweep)...");
    cache.set_recipe(5, "Paloma".to_string());

    println!("\n⚡ Letting everything expire...");
    clock.advance(Duration::from_secs(31));
    let _ = cache.get_recipe(5);

    println!("\n⚡ Parsing a request...");
    let parsed = parse("something smoky with mezcal for a party");
    tracing::info!(?parsed, "parsed request");

    // The default manager stays silent
    let quiet: CacheManager<String, String, NoopMetrics, ManualClock> =
        CacheManager::with_clock_and_metrics(CacheConfig::default(), clock, NoopMetrics)?;
    quiet.set_recipe(1, "Negroni".to_string());

    println!("\n✅ Check your console output for structured logs!");
    Ok(())
}

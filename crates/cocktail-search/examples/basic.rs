//! Basic example: parse a request, enrich explicit arguments, cache the result

use cocktail_search::prelude::*;
use serde_json::json;
use std::time::Duration;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== cocktail-search Basic Example ===\n");

    let cache: CacheManager = CacheManager::new(CacheConfig::with_ttl(Duration::from_secs(120)))?;
    let parser = QueryParser::new();

    let request = "a bitter, strong gin drink, stirred, without lime";
    let parsed = parser.parse(request);
    println!("Parsed facets: {}", serde_json::to_string_pretty(&parsed)?);

    // The caller asked for a specific glass; parsing never overrides it
    let explicit = SearchArgs {
        glass: Some("coupe".into()),
        ..SearchArgs::with_query(request)
    };
    let merged = enhance_search_args(&explicit, &parsed);
    println!("\nMerged arguments: {}", serde_json::to_string_pretty(&merged)?);

    match cache.get_result(&merged) {
        Some(hit) => println!("\n✅ Cache HIT: {hit}"),
        None => {
            println!("\n❌ Cache MISS, calling the API...");
            cache.set_result(&merged, json!({ "drinks": ["Negroni", "Martinez"] }));
        }
    }

    // Same request again is served from cache
    let again = parser.enrich(request, &explicit);
    if let Some(hit) = cache.get_result(&again) {
        println!("✅ Cache HIT on repeat: {hit}");
    }

    cache.set_recipe(
        11003,
        json!({ "id": 11003, "name": "Negroni", "glass": "rocks" }),
    );
    println!("\nRecipe 11003: {:?}", cache.get_recipe(11003));

    let stats = cache.stats();
    println!("\n=== Stats ===");
    println!(
        "Recipes: {} entries, hit ratio {:.2}",
        stats.recipes.size,
        stats.recipes.hit_ratio()
    );
    println!(
        "Results: {} entries, hit ratio {:.2}",
        stats.results.size,
        stats.results.hit_ratio()
    );

    cache.clear();
    println!("\nCleared; recipes left: {}", cache.stats().recipes.size);
    Ok(())
}

//! Read-through example: the API client plugs in as a `Loader`

use async_trait::async_trait;
use cocktail_search::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Recipe {
    id: u64,
    name: String,
    glass: String,
}

/// Stand-in for the remote cocktail API
struct FakeApi {
    recipes: HashMap<u64, Recipe>,
    calls: AtomicUsize,
}

impl FakeApi {
    fn new() -> Self {
        let mut recipes = HashMap::new();
        recipes.insert(
            11003,
            Recipe {
                id: 11003,
                name: "Negroni".into(),
                glass: "rocks".into(),
            },
        );
        recipes.insert(
            11007,
            Recipe {
                id: 11007,
                name: "Margarita".into(),
                glass: "coupe".into(),
            },
        );

        Self {
            recipes,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Loader<u64, Recipe> for FakeApi {
    async fn load(&self, id: &u64) -> Result<Option<Recipe>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        println!("  -> Fetching recipe {id} from the API...");
        // Simulate latency
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(self.recipes.get(id).cloned())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Read-Through Example ===\n");

    let cache: CacheManager<Recipe> = CacheManager::new(CacheConfig::default())?;
    let api = FakeApi::new();

    println!("1. First lookup (miss, loads)");
    let recipe = cache.get_or_load_recipe(11003, &api).await?;
    println!("   Got: {:?}", recipe);

    println!("\n2. Second lookup (hit, no API call)");
    let recipe = cache.get_or_load_recipe(11003, &api).await?;
    println!("   Got: {:?}", recipe);

    println!("\n3. Unknown id (nothing cached)");
    let missing = cache.get_or_load_recipe(99999, &api).await?;
    println!("   Got: {:?}", missing);

    println!("\nAPI calls: {}", api.calls.load(Ordering::SeqCst));
    println!("Recipe cache size: {}", cache.stats().recipes.size);
    Ok(())
}

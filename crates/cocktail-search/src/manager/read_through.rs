use async_trait::async_trait;
use tracing::{debug, warn};

use cocktail_search_core::{CacheKey, CacheMetrics, Clock, Result};

use super::CacheManager;

/// Fetches data from the remote API on a cache miss
///
/// This is the seam for the external API client; transport, retries and
/// pagination are its business.
#[async_trait]
pub trait Loader<K, V>: Send + Sync {
    /// Load data for the given key; `Ok(None)` means the API has nothing
    async fn load(&self, key: &K) -> Result<Option<V>>;
}

impl<R, Q, M, C> CacheManager<R, Q, M, C>
where
    R: Clone + Send + Sync,
    Q: Clone + Send + Sync,
    M: CacheMetrics,
    C: Clock,
{
    /// Get a recipe, loading and storing it on a miss
    ///
    /// Nothing is cached when the loader fails or finds nothing.
    pub async fn get_or_load_recipe<L>(&self, id: u64, loader: &L) -> Result<Option<R>>
    where
        L: Loader<u64, R> + ?Sized,
    {
        if let Some(recipe) = self.get_recipe(id) {
            return Ok(Some(recipe));
        }

        match loader.load(&id).await {
            Ok(Some(recipe)) => {
                self.set_recipe(id, recipe.clone());
                Ok(Some(recipe))
            }
            Ok(None) => {
                debug!(target: "cocktail_search", id, "recipe not found upstream");
                Ok(None)
            }
            Err(err) => {
                warn!(target: "cocktail_search", id, error = %err, "recipe load failed");
                Err(err)
            }
        }
    }

    /// Get a query result, loading and storing it on a miss
    ///
    /// Nothing is cached when the loader fails or finds nothing.
    pub async fn get_or_load_result<K, L>(&self, key: K, loader: &L) -> Result<Option<Q>>
    where
        K: CacheKey,
        L: Loader<K, Q> + ?Sized,
    {
        let full_key = key.full_key();
        if let Some(value) = self.get_result(full_key.as_str()) {
            return Ok(Some(value));
        }

        match loader.load(&key).await {
            Ok(Some(value)) => {
                self.set_result(full_key, value.clone());
                Ok(Some(value))
            }
            Ok(None) => {
                debug!(target: "cocktail_search", key = %full_key, "no upstream result");
                Ok(None)
            }
            Err(err) => {
                warn!(
                    target: "cocktail_search",
                    key = %full_key,
                    error = %err,
                    "result load failed"
                );
                Err(err)
            }
        }
    }
}

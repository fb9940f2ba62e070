//! Result-cache key trait and implementations

/// Trait for types that can key the query-result collection
///
/// Recipes are keyed by their numeric id directly; query results go through a
/// string signature produced here, usually derived from the search arguments.
pub trait CacheKey: Send + Sync {
    /// Generate the key string
    fn cache_key(&self) -> String;

    /// Optional namespace for the key, usually the tool that produced it
    fn namespace(&self) -> Option<&str> {
        None
    }

    /// Get the full key including namespace
    fn full_key(&self) -> String {
        match self.namespace() {
            Some(ns) => format!("{}:{}", ns, self.cache_key()),
            None => self.cache_key(),
        }
    }
}

impl CacheKey for String {
    fn cache_key(&self) -> String {
        self.clone()
    }
}

impl CacheKey for &str {
    fn cache_key(&self) -> String {
        self.to_string()
    }
}

//! cocktail-search: query parsing and result caching for a cocktail-recipe API
//!
//! # Features
//!
//! - **Query parsing**: free text to typed search facets, first match wins
//! - **Argument enrichment**: inferred facets never override caller input
//! - **Two bounded caches**: recipes by id, query results by key
//! - **Strict TTL** with lazy expiry and batch eviction of the coldest entries
//! - **Metrics integration** via `tracing` or the `metrics` crate
//!
//! # Quick Start
//!
//! ```rust
//! use cocktail_search::prelude::*;
//! use serde_json::json;
//!
//! let cache: CacheManager = CacheManager::with_defaults();
//! let parser = QueryParser::new();
//!
//! let args = parser.enrich("a bitter, strong drink without lime", &SearchArgs::default());
//! assert_eq!(args.preferred_strength.as_deref(), Some("strong"));
//!
//! if cache.get_result(&args).is_none() {
//!     let fetched = json!([{ "id": 11003, "name": "Negroni" }]);
//!     cache.set_result(&args, fetched);
//! }
//! assert!(cache.get_result(&args).is_some());
//! ```

mod manager;

// Re-export core
pub use cocktail_search_core::*;

// Re-export storage
pub use cocktail_search_storage::{CacheConfig, MemoryCache, memory::eviction};

// Re-export parser
pub use cocktail_search_parser::{
    Difficulty, Facet, Flavor, Glass, Method, Mood, Occasion, ParsedQuery, QueryParser,
    SearchArgs, Spirit, Strength, VOCABULARY_VERSION, enhance_search_args, parse,
};

// Export manager
pub use manager::{CacheManager, Loader, ManagerStats};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        CacheConfig, CacheError, CacheKey, CacheManager, Loader, ParsedQuery, QueryParser,
        Result, SearchArgs, enhance_search_args, parse,
    };
}

#[cfg(test)]
mod tests;

//! cocktail-search-storage: Bounded in-memory collections for cocktail-search

pub mod memory;

pub use memory::{CacheConfig, MemoryCache};

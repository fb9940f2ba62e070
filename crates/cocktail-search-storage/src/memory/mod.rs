//! In-memory cache collections

mod cache;
mod config;
pub mod eviction;

pub use cache::MemoryCache;
pub use config::CacheConfig;

//! cocktail-search-core: Core traits and types for cocktail-search
//!
//! This crate provides the foundational types and traits shared by the
//! cache collections, the query parser and the cache manager.

mod error;
mod traits;
mod types;

pub use error::{CacheError, Result};
pub use traits::*;
pub use types::*;

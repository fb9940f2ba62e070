//! cocktail-search-parser: Free-text to search-facet extraction
//!
//! Turns phrases like "a bitter, strong drink without lime" into a typed
//! [`ParsedQuery`], and folds those facets into caller-supplied
//! [`SearchArgs`] without overriding anything the caller set explicitly.
//!
//! ```rust
//! use cocktail_search_parser::{QueryParser, SearchArgs, Spirit};
//!
//! let parser = QueryParser::new();
//! let parsed = parser.parse("gin martini, stirred, easy");
//! assert_eq!(parsed.spirit, Some(Spirit::Gin));
//!
//! let args = SearchArgs {
//!     spirit: Some("vodka".into()),
//!     ..Default::default()
//! };
//! let merged = parser.enrich("gin martini, stirred", &args);
//! assert_eq!(merged.spirit.as_deref(), Some("vodka"));
//! assert_eq!(merged.method.as_deref(), Some("stir"));
//! ```

mod args;
mod parsed;
mod parser;
mod vocabulary;

pub use args::{SearchArgs, enhance_search_args};
pub use parsed::ParsedQuery;
pub use parser::{
    DIFFICULTIES, FLAVORS, FacetTable, GLASSES, METHODS, MOODS, OCCASIONS, SPIRITS, STRENGTHS,
    parse,
};
pub use vocabulary::{
    Difficulty, Facet, Flavor, Glass, Method, Mood, Occasion, Spirit, Strength,
    VOCABULARY_VERSION,
};

/// Stateless handle over the process-wide vocabulary tables
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParser;

impl QueryParser {
    /// Create a parser handle
    pub fn new() -> Self {
        Self
    }

    /// Extract facets from free text
    pub fn parse(&self, text: &str) -> ParsedQuery {
        parse(text)
    }

    /// Parse `text` and fold the result into `args`
    pub fn enrich(&self, text: &str, args: &SearchArgs) -> SearchArgs {
        enhance_search_args(args, &parse(text))
    }
}

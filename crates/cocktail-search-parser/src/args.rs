//! Search arguments and the facet merge

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use cocktail_search_core::CacheKey;

use crate::parsed::ParsedQuery;
use crate::vocabulary::Facet;

/// Arguments for a recipe search, as supplied by the caller
///
/// Fields the merge does not know about are kept in `extra` and passed
/// through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_strength: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_flavors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spirit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must_include: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must_exclude: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchArgs {
    /// Arguments carrying only a free-text query
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }
}

/// Fold parsed facets into caller arguments
///
/// Explicit caller values always win: a facet is only applied to a field the
/// caller left unset (absent or blank). `must_include` and `must_exclude`
/// are concatenated instead, caller entries first, without de-duplication.
pub fn enhance_search_args(args: &SearchArgs, parsed: &ParsedQuery) -> SearchArgs {
    let mut merged = args.clone();

    fill(&mut merged.preferred_strength, parsed.strength);
    fill(&mut merged.spirit, parsed.spirit);
    fill(&mut merged.glass, parsed.glass);
    fill(&mut merged.method, parsed.method);
    fill(&mut merged.difficulty, parsed.difficulty);
    fill(&mut merged.mood, parsed.mood);
    fill(&mut merged.occasion, parsed.occasion);

    let flavors_unset = merged
        .preferred_flavors
        .as_ref()
        .is_none_or(|flavors| flavors.is_empty());
    if flavors_unset && !parsed.flavors.is_empty() {
        merged.preferred_flavors = Some(
            parsed
                .flavors
                .iter()
                .map(|flavor| flavor.as_str().to_string())
                .collect(),
        );
    }

    merged.must_include.extend(parsed.ingredients.iter().cloned());
    merged.must_exclude.extend(parsed.excludes.iter().cloned());
    merged
}

fn fill<T: Facet>(slot: &mut Option<String>, inferred: Option<T>) {
    let unset = slot.as_deref().is_none_or(|value| value.trim().is_empty());
    if let (true, Some(tag)) = (unset, inferred) {
        *slot = Some(tag.as_str().to_string());
    }
}

// Result-cache key derived from the merged arguments. Struct fields serialize
// in declaration order and `extra` is a sorted map, so equal arguments always
// produce the same key.
impl CacheKey for SearchArgs {
    fn cache_key(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }

    fn namespace(&self) -> Option<&str> {
        Some("search")
    }
}

impl CacheKey for &SearchArgs {
    fn cache_key(&self) -> String {
        SearchArgs::cache_key(self)
    }

    fn namespace(&self) -> Option<&str> {
        SearchArgs::namespace(self)
    }
}

//! Text to facet extraction

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::parsed::ParsedQuery;
use crate::vocabulary::{
    Difficulty, EXCLUSION_PATTERN, Facet, Flavor, Glass, INGREDIENT_PATTERN, Method, Mood,
    Occasion, Spirit, Strength,
};

/// Ordered `(tag, pattern)` rules for one facet
pub struct FacetTable<T: Facet> {
    rules: Vec<(T, Regex)>,
}

impl<T: Facet> FacetTable<T> {
    /// Compile every tag's pattern in declaration order
    ///
    /// Patterns are compile-time constants; a failure here is a bug in the
    /// vocabulary, caught by the test suite.
    fn compile() -> Self {
        let rules = T::ALL
            .iter()
            .map(|&tag| {
                let regex = Regex::new(tag.pattern())
                    .unwrap_or_else(|e| panic!("invalid pattern for `{}`: {e}", tag.as_str()));
                (tag, regex)
            })
            .collect();
        Self { rules }
    }

    /// First declared tag whose pattern matches; later tags are never tried
    pub fn first_match(&self, text: &str) -> Option<T> {
        self.rules
            .iter()
            .find(|(_, regex)| regex.is_match(text))
            .map(|(tag, _)| *tag)
    }

    /// Every matching tag, once each, in declaration order
    pub fn all_matches(&self, text: &str) -> Vec<T> {
        self.rules
            .iter()
            .filter(|(_, regex)| regex.is_match(text))
            .map(|(tag, _)| *tag)
            .collect()
    }

    /// Rules in priority order
    pub fn rules(&self) -> impl Iterator<Item = (T, &Regex)> {
        self.rules.iter().map(|(tag, regex)| (*tag, regex))
    }
}

pub static STRENGTHS: Lazy<FacetTable<Strength>> = Lazy::new(FacetTable::compile);
pub static FLAVORS: Lazy<FacetTable<Flavor>> = Lazy::new(FacetTable::compile);
pub static SPIRITS: Lazy<FacetTable<Spirit>> = Lazy::new(FacetTable::compile);
pub static GLASSES: Lazy<FacetTable<Glass>> = Lazy::new(FacetTable::compile);
pub static METHODS: Lazy<FacetTable<Method>> = Lazy::new(FacetTable::compile);
pub static DIFFICULTIES: Lazy<FacetTable<Difficulty>> = Lazy::new(FacetTable::compile);
pub static MOODS: Lazy<FacetTable<Mood>> = Lazy::new(FacetTable::compile);
pub static OCCASIONS: Lazy<FacetTable<Occasion>> = Lazy::new(FacetTable::compile);

static INGREDIENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(INGREDIENT_PATTERN).expect("ingredient pattern is valid"));
static EXCLUSIONS: Lazy<Regex> =
    Lazy::new(|| Regex::new(EXCLUSION_PATTERN).expect("exclusion pattern is valid"));
static SEPARATOR_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s-]+").expect("separator pattern is valid"));

/// Extract search facets from free text
///
/// Never fails: text that matches nothing yields an empty [`ParsedQuery`].
/// Parsing the same text twice yields equal results.
pub fn parse(text: &str) -> ParsedQuery {
    let lowered = text.to_lowercase();

    let parsed = ParsedQuery {
        strength: STRENGTHS.first_match(&lowered),
        flavors: FLAVORS.all_matches(&lowered),
        spirit: SPIRITS.first_match(&lowered),
        glass: GLASSES.first_match(&lowered),
        excludes: extract_excludes(text),
        ingredients: extract_ingredients(text),
        method: METHODS.first_match(&lowered),
        difficulty: DIFFICULTIES.first_match(&lowered),
        mood: MOODS.first_match(&lowered),
        occasion: OCCASIONS.first_match(&lowered),
    };

    trace!(target: "cocktail_search", facets = parsed.facet_count(), "parsed query");
    parsed
}

/// Named ingredients in order of appearance, repeats kept
fn extract_ingredients(text: &str) -> Vec<String> {
    INGREDIENTS
        .find_iter(text)
        .map(|m| normalize_ingredient(m.as_str()))
        .collect()
}

fn normalize_ingredient(raw: &str) -> String {
    SEPARATOR_RUNS
        .replace_all(&raw.to_lowercase(), " ")
        .into_owned()
}

/// Words following an exclusion trigger, in order of appearance
fn extract_excludes(text: &str) -> Vec<String> {
    EXCLUSIONS
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

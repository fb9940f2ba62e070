//! Structured result of parsing a query

use serde::{Deserialize, Serialize};

use crate::vocabulary::{Difficulty, Flavor, Glass, Method, Mood, Occasion, Spirit, Strength};

/// Search facets inferred from one piece of free text
///
/// Produced fresh per call and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<Strength>,
    /// Every matched flavor, once, in vocabulary order
    pub flavors: Vec<Flavor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spirit: Option<Spirit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glass: Option<Glass>,
    /// Excluded terms in order of appearance
    pub excludes: Vec<String>,
    /// Named ingredients in order of appearance, repeats kept
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<Method>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasion: Option<Occasion>,
}

impl ParsedQuery {
    /// Number of facets that carry a value
    pub fn facet_count(&self) -> usize {
        [
            self.strength.is_some(),
            !self.flavors.is_empty(),
            self.spirit.is_some(),
            self.glass.is_some(),
            !self.excludes.is_empty(),
            !self.ingredients.is_empty(),
            self.method.is_some(),
            self.difficulty.is_some(),
            self.mood.is_some(),
            self.occasion.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// True when nothing was recognised
    pub fn is_empty(&self) -> bool {
        self.facet_count() == 0
    }
}

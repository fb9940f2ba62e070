//! Fixed facet vocabularies
//!
//! Every single-valued facet is an enum whose variants are declared in
//! match priority order: the parser walks them top to bottom and keeps the
//! first hit. Labels must stay in sync with the search facets the remote
//! API accepts; bump [`VOCABULARY_VERSION`] whenever a label or pattern
//! changes.
//!
//! Category patterns run against lower-cased text.

use serde::{Deserialize, Serialize};

/// Version of the vocabulary tables below
pub const VOCABULARY_VERSION: u32 = 1;

/// A closed vocabulary of tags, each recognised by one pattern
pub trait Facet: Copy + Sized + 'static {
    /// Every tag, in match priority order
    const ALL: &'static [Self];

    /// Label sent to the search API
    fn as_str(self) -> &'static str;

    /// Regex recognising the tag in lower-cased text
    fn pattern(self) -> &'static str;
}

macro_rules! facet {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $label:literal : $pattern:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Facet for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn pattern(self) -> &'static str {
                match self {
                    $($name::$variant => $pattern,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

facet! {
    /// Alcoholic strength
    Strength {
        Light => "light": r"\b(light|weak|mild|low[- ]?(alcohol|abv|proof)|sessionable)\b",
        Medium => "medium": r"\b(medium|moderate|balanced)\b",
        Strong => "strong": r"\b(strong|stiff|boozy|potent|high[- ]?(alcohol|abv|proof)|spirit[- ]forward)\b",
    }
}

facet! {
    /// Flavor profile; the only multi-valued category
    Flavor {
        Sweet => "sweet": r"\b(sweet|sugary|dessert)\b",
        Sour => "sour": r"\b(sour|tart|tangy)\b",
        Bitter => "bitter": r"\b(bitter|bittersweet|amaro)\b",
        Fruity => "fruity": r"\b(fruity|fruit|berry|berries)\b",
        Citrus => "citrus": r"\b(citrus|citrusy|zesty|lemony)\b",
        Herbal => "herbal": r"\b(herbal|herby|botanical|minty)\b",
        Spicy => "spicy": r"\b(spicy|spiced|peppery|hot)\b",
        Smoky => "smoky": r"\b(smoky|smokey|smoked|peaty)\b",
        Creamy => "creamy": r"\b(creamy|velvety|milky|rich)\b",
        Refreshing => "refreshing": r"\b(refreshing|crisp|cooling)\b",
        Tropical => "tropical": r"\b(tropical|tiki|coconut|pineapple)\b",
        Dry => "dry": r"\bdry\b",
    }
}

facet! {
    /// Base spirit
    Spirit {
        Vodka => "vodka": r"\bvodka\b",
        Gin => "gin": r"\bgin\b",
        Rum => "rum": r"\brum\b",
        Tequila => "tequila": r"\btequila\b",
        Mezcal => "mezcal": r"\bmezcal\b",
        Whiskey => "whiskey": r"\b(whiske?y|bourbon|scotch|rye)\b",
        Brandy => "brandy": r"\b(brandy|cognac|armagnac|pisco|calvados)\b",
    }
}

facet! {
    /// Serving glass
    Glass {
        Martini => "martini": r"\b(martini|cocktail glass)\b",
        Coupe => "coupe": r"\bcoupe\b",
        Rocks => "rocks": r"\b(rocks|lowball|old[- ]fashioned glass)\b",
        Highball => "highball": r"\bhighball\b",
        Collins => "collins": r"\bcollins\b",
        Hurricane => "hurricane": r"\bhurricane\b",
        Margarita => "margarita": r"\bmargarita glass\b",
        Flute => "flute": r"\b(flute|champagne glass)\b",
        Mug => "mug": r"\bmug\b",
        Wine => "wine": r"\bwine glass\b",
    }
}

facet! {
    /// Preparation method
    Method {
        Shake => "shake": r"\b(shake|shaken|shaking)\b",
        Stir => "stir": r"\b(stir|stirred|stirring)\b",
        Build => "build": r"\b(build|built)\b",
        Blend => "blend": r"\b(blend|blended|frozen)\b",
        Muddle => "muddle": r"\b(muddle|muddled|muddling)\b",
        Layer => "layer": r"\b(layer|layered)\b",
    }
}

facet! {
    /// Preparation difficulty
    Difficulty {
        Easy => "easy": r"\b(easy|simple|quick|beginner)\b",
        Medium => "medium": r"\b(intermediate|medium difficulty)\b",
        Hard => "hard": r"\b(hard|difficult|advanced|complex|challenging)\b",
    }
}

facet! {
    /// Mood the drink should suit
    Mood {
        Relaxing => "relaxing": r"\b(relax|relaxing|chill|unwind|calm)\b",
        Celebratory => "celebratory": r"\b(celebrat\w*|festive)\b",
        Romantic => "romantic": r"\b(romantic|romance)\b",
        Energizing => "energizing": r"\b(energi[sz]ing|energetic|pick[- ]me[- ]up)\b",
        Cozy => "cozy": r"\b(cozy|cosy|warming|comforting)\b",
        Adventurous => "adventurous": r"\b(adventurous|unusual|exotic)\b",
    }
}

facet! {
    /// Occasion the drink is for
    Occasion {
        Party => "party": r"\b(party|parties|crowd)\b",
        Brunch => "brunch": r"\bbrunch\b",
        DateNight => "date_night": r"\bdate( night)?\b",
        Nightcap => "nightcap": r"\b(nightcap|after[- ]dinner|digestif|bedtime)\b",
        Dinner => "dinner": r"\b(dinner|aperitif)\b",
        Holiday => "holiday": r"\b(holiday|christmas|thanksgiving|new year)\b",
        Summer => "summer": r"\b(summer|beach|poolside)\b",
        Winter => "winter": r"\bwinter\b",
    }
}

/// Named modifiers and liqueurs, matched case-insensitively on the raw text
pub(crate) const INGREDIENT_PATTERN: &str = r"(?i)\b(sweet[\s-]+vermouth|dry[\s-]+vermouth|vermouth|campari|aperol|angostura|peychaud'?s|bitters|cointreau|triple[\s-]+sec|grand[\s-]+marnier|cura[cç]ao|chartreuse|amaretto|kahl[uú]a|coffee[\s-]+liqueur|elderflower|st[\s-]+germain|maraschino|absinthe|b[eé]n[eé]dictine|drambuie|frangelico|irish[\s-]+cream|cr[eè]me[\s-]+de[\s-]+(?:cassis|menthe|cacao|violette)|falernum|orgeat|grenadine|simple[\s-]+syrup|prosecco|champagne|ginger[\s-]+beer|tonic)\b";

/// Exclusion phrases: a trigger word followed by one or two words
pub(crate) const EXCLUSION_PATTERN: &str =
    r"(?i)\b(?:without|no|avoid|except|not|skip|minus)\s+(\w+(?:\s+\w+)?)";

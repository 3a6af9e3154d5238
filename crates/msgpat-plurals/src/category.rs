//! The six CLDR plural category names.

use std::fmt;

/// A CLDR plural category keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PluralCategory {
    /// `zero`
    Zero,
    /// `one`
    One,
    /// `two`
    Two,
    /// `few`
    Few,
    /// `many`
    Many,
    /// `other` — every locale's fallback category.
    Other,
}

impl PluralCategory {
    /// The lowercase CLDR keyword for this category.
    pub fn name(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    /// Parse a CLDR keyword (`"zero"`, `"one"`, ...) into a category.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "zero" => Some(PluralCategory::Zero),
            "one" => Some(PluralCategory::One),
            "two" => Some(PluralCategory::Two),
            "few" => Some(PluralCategory::Few),
            "many" => Some(PluralCategory::Many),
            "other" => Some(PluralCategory::Other),
            _ => None,
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True if `s` is one of the six CLDR category keywords.
pub fn is_valid_category(s: &str) -> bool {
    PluralCategory::parse(s).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_category() {
        for cat in [
            PluralCategory::Zero,
            PluralCategory::One,
            PluralCategory::Two,
            PluralCategory::Few,
            PluralCategory::Many,
            PluralCategory::Other,
        ] {
            assert_eq!(PluralCategory::parse(cat.name()), Some(cat));
        }
    }

    #[test]
    fn rejects_unknown_keywords() {
        assert!(!is_valid_category("some"));
        assert!(!is_valid_category("Other"));
    }
}

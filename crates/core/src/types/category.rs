//! Fixed catalog categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The storefront's closed set of product categories.
///
/// `Boxes` (the dumpling boxes) is the primary category and the default for
/// anything that cannot be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Boxes,
    Sauces,
    Chopsticks,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Boxes, Self::Sauces, Self::Chopsticks];

    /// Map a raw category label to a category, if it is one of the known
    /// spellings. Matching is case-insensitive and ignores surrounding space.
    #[must_use]
    pub fn from_raw(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "boxes" | "dumplings" | "box" => Some(Self::Boxes),
            "sauces" | "sauce" => Some(Self::Sauces),
            "chopsticks" | "chop-sticks" | "chop_sticks" => Some(Self::Chopsticks),
            _ => None,
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Boxes => "boxes",
            Self::Sauces => "sauces",
            Self::Chopsticks => "chopsticks",
        }
    }

    /// Translation key for the filter label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Boxes => "filter.boxes",
            Self::Sauces => "filter.sauces",
            Self::Chopsticks => "filter.chopsticks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

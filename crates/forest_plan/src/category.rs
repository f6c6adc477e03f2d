//! Object categories placed by a forest generation run.
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the seven object categories a generation plan counts.
///
/// The declaration order is the canonical order used whenever all categories are
/// visited (sampling, reports, scene population). Draw order matters for seeded
/// reproducibility, so it must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Trees,
    Rocks,
    Bushes,
    Flowers,
    Mushrooms,
    Clouds,
    Birds,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 7;

    /// All categories in canonical order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Trees,
        Category::Rocks,
        Category::Bushes,
        Category::Flowers,
        Category::Mushrooms,
        Category::Clouds,
        Category::Birds,
    ];

    /// Lowercase plural name, e.g. `"trees"`.
    pub fn name(self) -> &'static str {
        match self {
            Category::Trees => "trees",
            Category::Rocks => "rocks",
            Category::Bushes => "bushes",
            Category::Flowers => "flowers",
            Category::Mushrooms => "mushrooms",
            Category::Clouds => "clouds",
            Category::Birds => "birds",
        }
    }

    /// Position in [`Category::ALL`].
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::UnknownCategory { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_canonical_order() {
        for (i, c) in Category::ALL.into_iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn parses_known_names() {
        for c in Category::ALL {
            assert_eq!(c.name().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn unknown_name_fails_fast() {
        let err = "Trees".parse::<Category>().unwrap_err();
        assert!(matches!(err, Error::UnknownCategory { ref name } if name == "Trees"));
        assert!("butterflies".parse::<Category>().is_err());
    }
}

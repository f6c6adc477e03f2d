//! Density tiers and the per-category count ranges they select.
//!
//! A [`DensityProfile`] maps every [`Category`] to an inclusive [`CountRange`]. The
//! four preset tiers widen from sparse to dense; the random tier spans the combined
//! range. Counts are sampled uniformly and independently per category.
use std::fmt;
use std::str::FromStr;

use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::category::Category;
use crate::error::{Error, Result};
use crate::sampling::uniform_u32_inclusive;

/// Named density preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Density {
    Sparse,
    #[default]
    Medium,
    Dense,
    Random,
}

impl Density {
    pub const ALL: [Density; 4] = [
        Density::Sparse,
        Density::Medium,
        Density::Dense,
        Density::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Density::Sparse => "sparse",
            Density::Medium => "medium",
            Density::Dense => "dense",
            Density::Random => "random",
        }
    }

    /// Resolve a tier by name, falling back to [`Density::Medium`] for unknown names.
    pub fn from_name_lenient(name: &str) -> Self {
        match Density::ALL.into_iter().find(|d| d.name() == name) {
            Some(d) => d,
            None => {
                warn!("Unknown density '{}'; falling back to medium.", name);
                Density::Medium
            }
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lenient: never fails, unknown names resolve to [`Density::Medium`].
impl FromStr for Density {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Density::from_name_lenient(s))
    }
}

/// Inclusive integer range `[min, max]` for one category's object count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    /// Unchecked constructor for literal presets.
    pub(crate) const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Validated constructor. Rejects inverted ranges and ranges that can only yield zero.
    pub fn try_new(category: Category, min: u32, max: u32) -> Result<Self> {
        let range = Self { min, max };
        range.validate(category)?;
        Ok(range)
    }

    pub fn validate(&self, category: Category) -> Result<()> {
        if self.min > self.max || self.max == 0 {
            return Err(Error::InvalidRange {
                category,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Draw a count uniformly from the range.
    #[inline]
    pub fn sample(&self, rng: &mut dyn RngCore) -> u32 {
        uniform_u32_inclusive(rng, self.min, self.max)
    }
}

/// Count ranges for every category of one density tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityProfile {
    ranges: [CountRange; Category::COUNT],
}

impl DensityProfile {
    /// Preset ranges for a density tier.
    pub fn preset(density: Density) -> Self {
        let r = CountRange::new;
        // Order follows `Category::ALL`: trees, rocks, bushes, flowers, mushrooms, clouds, birds.
        let ranges = match density {
            Density::Sparse => [r(5, 8), r(3, 6), r(2, 5), r(4, 7), r(2, 4), r(3, 5), r(2, 4)],
            Density::Medium => [
                r(8, 15),
                r(5, 10),
                r(4, 8),
                r(6, 12),
                r(3, 7),
                r(5, 8),
                r(3, 6),
            ],
            Density::Dense => [
                r(15, 25),
                r(10, 18),
                r(8, 15),
                r(12, 20),
                r(7, 12),
                r(8, 12),
                r(5, 10),
            ],
            Density::Random => [
                r(3, 30),
                r(2, 25),
                r(2, 20),
                r(3, 25),
                r(2, 15),
                r(2, 15),
                r(2, 12),
            ],
        };
        Self { ranges }
    }

    /// Range configured for `category`.
    #[inline]
    pub fn range(&self, category: Category) -> CountRange {
        self.ranges[category.index()]
    }

    /// Replace the range for one category, validating it first.
    pub fn with_range(mut self, category: Category, min: u32, max: u32) -> Result<Self> {
        self.ranges[category.index()] = CountRange::try_new(category, min, max)?;
        Ok(self)
    }

    /// Replace the range for one category with an already built [`CountRange`].
    pub fn with_count_range(mut self, category: Category, range: CountRange) -> Result<Self> {
        range.validate(category)?;
        self.ranges[category.index()] = range;
        Ok(self)
    }

    /// Draw a count for `category`.
    #[inline]
    pub fn sample(&self, category: Category, rng: &mut dyn RngCore) -> u32 {
        self.range(category).sample(rng)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, CountRange)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.range(c)))
    }
}

impl Default for DensityProfile {
    fn default() -> Self {
        Self::preset(Density::Medium)
    }
}

/// Sample a count for `category` from the tier named `profile`.
///
/// Unknown tier names fall back to medium.
pub fn object_count_for_profile(profile: &str, category: Category, rng: &mut dyn RngCore) -> u32 {
    DensityProfile::preset(Density::from_name_lenient(profile)).sample(category, rng)
}

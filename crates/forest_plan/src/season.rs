//! Seasons and the per-category multipliers they apply to a generation plan.
use std::fmt;
use std::str::FromStr;

use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{Error, Result};
use crate::plan::GenerationPlan;
use crate::sampling::uniform_u32_inclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    /// Pick a season uniformly at random. Consumes one draw.
    pub fn random(rng: &mut dyn RngCore) -> Self {
        Season::ALL[uniform_u32_inclusive(rng, 0, 3) as usize]
    }

    /// Multiplier preset for this season.
    pub fn profile(self) -> SeasonProfile {
        SeasonProfile::preset(self)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Season::ALL
            .into_iter()
            .find(|season| season.name() == s)
            .ok_or_else(|| Error::UnknownSeason { name: s.to_owned() })
    }
}

/// Positive count multiplier for every category.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonProfile {
    multipliers: [f64; Category::COUNT],
}

impl SeasonProfile {
    pub fn preset(season: Season) -> Self {
        // Order follows `Category::ALL`: trees, rocks, bushes, flowers, mushrooms, clouds, birds.
        let multipliers = match season {
            Season::Spring => [1.0, 1.0, 1.3, 1.8, 1.2, 1.1, 1.5],
            Season::Summer => [1.2, 1.0, 1.5, 1.3, 0.8, 0.8, 1.4],
            Season::Autumn => [1.1, 1.0, 1.0, 0.5, 2.0, 1.3, 0.9],
            Season::Winter => [0.8, 1.2, 0.6, 0.2, 0.3, 1.5, 0.5],
        };
        Self { multipliers }
    }

    /// A profile that leaves every count unchanged.
    pub fn neutral() -> Self {
        Self {
            multipliers: [1.0; Category::COUNT],
        }
    }

    #[inline]
    pub fn multiplier(&self, category: Category) -> f64 {
        self.multipliers[category.index()]
    }

    /// Replace one multiplier. Rejects non-finite and non-positive values.
    pub fn with_multiplier(mut self, category: Category, value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::InvalidMultiplier { category, value });
        }
        self.multipliers[category.index()] = value;
        Ok(self)
    }

    /// Scale one count: truncate toward zero, then floor at 1.
    #[inline]
    pub fn adjust(&self, category: Category, count: u32) -> u32 {
        let scaled = (count as f64 * self.multiplier(category)).trunc();
        // `as` saturates for values beyond u32::MAX.
        (scaled as u32).max(1)
    }

    /// Scale every count of `plan`. No category is ever scaled below 1.
    pub fn apply(&self, plan: &GenerationPlan) -> GenerationPlan {
        let mut out = GenerationPlan::new();
        for (category, count) in plan.iter() {
            out.set(category, self.adjust(category, count));
        }
        out
    }
}

impl Default for SeasonProfile {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Scale `counts` by the multipliers of `season`.
pub fn apply_season(counts: &GenerationPlan, season: Season) -> GenerationPlan {
    SeasonProfile::preset(season).apply(counts)
}

//! Generation plans: the final object count per category for one run.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::density::Density;
use crate::season::Season;

/// Object count for every [`Category`] of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationPlan {
    counts: [u32; Category::COUNT],
}

impl GenerationPlan {
    /// An empty plan with every count at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a plan from `(category, count)` pairs. Categories not listed stay at zero.
    pub fn from_counts(counts: impl IntoIterator<Item = (Category, u32)>) -> Self {
        let mut plan = Self::new();
        for (category, count) in counts {
            plan.set(category, count);
        }
        plan
    }

    #[inline]
    pub fn count(&self, category: Category) -> u32 {
        self.counts[category.index()]
    }

    #[inline]
    pub fn set(&mut self, category: Category, count: u32) {
        self.counts[category.index()] = count;
    }

    /// Set a count and return the plan.
    pub fn with_count(mut self, category: Category, count: u32) -> Self {
        self.set(category, count);
        self
    }

    /// Iterate `(category, count)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.count(c)))
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&n| n as u64).sum()
    }
}

/// Outcome of [`crate::planner::Planner::plan`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct PlannedRun {
    /// Final counts, after seasonal adjustment if any.
    pub counts: GenerationPlan,
    /// Counts sampled from the density profile, before seasonal adjustment.
    pub base_counts: GenerationPlan,
    /// Season applied, if seasonal adjustment was enabled.
    pub season: Option<Season>,
    /// Density tier the counts were sampled from.
    pub density: Density,
    /// Seed of the run's randomness source.
    pub seed: u64,
    /// Whether the seed was supplied by the caller (as opposed to drawn from entropy).
    pub seed_fixed: bool,
}

impl PlannedRun {
    pub fn report(&self) -> PlanReport<'_> {
        PlanReport { run: self }
    }
}

/// Human-readable summary of a [`PlannedRun`]. The format is presentational only.
pub struct PlanReport<'a> {
    run: &'a PlannedRun,
}

const RULE_WIDTH: usize = 50;

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let run = self.run;
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "PROCEDURAL FOREST GENERATION PLAN")?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "Density Mode: {}", run.density.name().to_uppercase())?;
        if run.seed_fixed {
            writeln!(f, "Seed: {} (reproducible)", run.seed)?;
        } else {
            writeln!(f, "Seed: random ({})", run.seed)?;
        }
        if let Some(season) = run.season {
            writeln!(f, "Season: {}", season.name().to_uppercase())?;
        }
        writeln!(f, "{light}")?;
        for (category, count) in run.counts.iter() {
            writeln!(f, "{:<10} {count}", format!("{}:", capitalize(category.name())))?;
        }
        writeln!(f, "{light}")?;
        writeln!(f, "TOTAL OBJECTS: {}", run.counts.total())?;
        write!(f, "{heavy}")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

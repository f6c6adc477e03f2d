//! The planner: one generation run's configuration plus the randomness source it owns.
//!
//! A [`Planner`] samples per-category counts from a [`DensityProfile`], applies an
//! optional seasonal adjustment and hands out per-instance transforms. Every draw
//! comes from the planner's own [`StdRng`], so two planners built with the same
//! seed and driven through the same sequence of calls produce identical results.
//! Independent runs must use independent planners.
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::category::Category;
use crate::density::{CountRange, Density, DensityProfile};
use crate::diversity::{DiversityRanges, InstanceTransform, RuntimeDiversity};
use crate::error::Result;
use crate::plan::{GenerationPlan, PlannedRun};
use crate::sampling::{bernoulli, uniform_f32};
use crate::season::{Season, SeasonProfile};

/// Default success probability of [`Planner::should_generate_cluster_default`].
pub const DEFAULT_CLUSTER_PROBABILITY: f64 = 0.3;

/// Seed used by [`Planner::reproducible_default`].
pub const DEFAULT_REPRODUCIBLE_SEED: u64 = 42;

/// Bounds of [`Planner::density_multiplier`].
pub const DENSITY_MULTIPLIER_RANGE: (f32, f32) = (0.5, 1.5);

/// Whether and how a run applies seasonal multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeasonSelection {
    /// Counts are used as sampled.
    #[default]
    Off,
    /// A season is picked uniformly at random from the run's randomness source.
    Random,
    /// The given season is applied.
    Fixed(Season),
}

/// Configuration for a generation run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlannerConfig {
    /// Density tier that selects the count ranges.
    pub density: Density,
    /// Fixed seed. `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Seasonal adjustment applied by [`Planner::plan`].
    pub season: SeasonSelection,
    /// Intervals for instance transforms.
    pub diversity: DiversityRanges,
    /// Explicit per-category ranges replacing the tier's.
    pub overrides: Vec<(Category, CountRange)>,
}

impl PlannerConfig {
    /// Creates a new [`PlannerConfig`] with the specified density tier.
    pub fn new(density: Density) -> Self {
        Self {
            density,
            ..Default::default()
        }
    }

    /// Sets the density tier.
    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Sets the density tier by name; unknown names select medium.
    pub fn with_density_name(mut self, name: &str) -> Self {
        self.density = Density::from_name_lenient(name);
        self
    }

    /// Fixes the seed, making the run reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Applies the given season's multipliers.
    pub fn with_season(mut self, season: Season) -> Self {
        self.season = SeasonSelection::Fixed(season);
        self
    }

    /// Applies the multipliers of a randomly chosen season.
    pub fn with_random_season(mut self) -> Self {
        self.season = SeasonSelection::Random;
        self
    }

    /// Sets the transform intervals.
    pub fn with_diversity(mut self, diversity: DiversityRanges) -> Self {
        self.diversity = diversity;
        self
    }

    /// Replaces the tier's range for one category.
    pub fn with_range_override(mut self, category: Category, min: u32, max: u32) -> Self {
        self.overrides.retain(|(c, _)| *c != category);
        self.overrides.push((category, CountRange { min, max }));
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.diversity.validate()?;
        for (category, range) in &self.overrides {
            range.validate(*category)?;
        }
        Ok(())
    }

    /// Density profile for this configuration, overrides applied.
    pub fn profile(&self) -> Result<DensityProfile> {
        self.overrides
            .iter()
            .try_fold(DensityProfile::preset(self.density), |profile, (c, r)| {
                profile.with_count_range(*c, *r)
            })
    }
}

/// Owns the randomness source of one generation run.
#[derive(Debug, Clone)]
pub struct Planner {
    density: Density,
    profile: DensityProfile,
    season: SeasonSelection,
    diversity: RuntimeDiversity,
    seed: u64,
    seed_fixed: bool,
    rng: StdRng,
}

impl Planner {
    pub fn try_new(config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        let profile = config.profile()?;
        let diversity = RuntimeDiversity::try_new(config.diversity)?;
        Ok(Self::assemble(&config, profile, diversity))
    }

    /// Like [`Planner::try_new`], for configurations known to be valid.
    ///
    /// # Panics
    ///
    /// Panics with the validation error if `config` is invalid.
    pub fn new(config: PlannerConfig) -> Self {
        Self::try_new(config).unwrap_or_else(|e| panic!("invalid planner configuration: {e}"))
    }

    /// Preset profile and default diversity; only for the built-in factories.
    fn from_preset(config: PlannerConfig) -> Self {
        let profile = DensityProfile::preset(config.density);
        Self::assemble(&config, profile, RuntimeDiversity::default())
    }

    fn assemble(
        config: &PlannerConfig,
        profile: DensityProfile,
        diversity: RuntimeDiversity,
    ) -> Self {
        let (seed, seed_fixed) = match config.seed {
            Some(seed) => (seed, true),
            None => (rand::random::<u64>(), false),
        };
        debug!(
            "Planner: density={} seed={} fixed={}.",
            config.density, seed, seed_fixed
        );

        Self {
            density: config.density,
            profile,
            season: config.season,
            diversity,
            seed,
            seed_fixed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// "Surprise me": entropy seed and a density tier chosen uniformly.
    pub fn random() -> Self {
        // 4 divides 2^64, so the modulo is unbiased.
        let pick = rand::random::<u64>() % Density::ALL.len() as u64;
        Self::from_preset(PlannerConfig::new(Density::ALL[pick as usize]))
    }

    /// Fixed seed, medium density.
    pub fn reproducible(seed: u64) -> Self {
        Self::from_preset(PlannerConfig::new(Density::Medium).with_seed(seed))
    }

    /// [`Planner::reproducible`] with [`DEFAULT_REPRODUCIBLE_SEED`].
    pub fn reproducible_default() -> Self {
        Self::reproducible(DEFAULT_REPRODUCIBLE_SEED)
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn profile(&self) -> &DensityProfile {
        &self.profile
    }

    /// Seed of the randomness source; for entropy-seeded planners this replays the run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_reproducible(&self) -> bool {
        self.seed_fixed
    }

    pub fn diversity(&self) -> &RuntimeDiversity {
        &self.diversity
    }

    /// The run's randomness source, for collaborators that draw from the same stream.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut self.rng
    }

    /// Sample a count for one category from the active profile.
    pub fn get_object_count(&mut self, category: Category) -> u32 {
        self.profile.sample(category, &mut self.rng)
    }

    /// Like [`Planner::get_object_count`] with the category given by name.
    ///
    /// Unknown names are a caller defect and return
    /// [`Error::UnknownCategory`](crate::error::Error::UnknownCategory).
    pub fn get_object_count_by_name(&mut self, category: &str) -> Result<u32> {
        let category: Category = category.parse()?;
        Ok(self.get_object_count(category))
    }

    /// Sample every category independently, in canonical order.
    pub fn get_all_counts(&mut self) -> GenerationPlan {
        let mut plan = GenerationPlan::new();
        for category in Category::ALL {
            let n = self.get_object_count(category);
            plan.set(category, n);
        }
        plan
    }

    /// Scale `counts` by a season's multipliers, choosing the season at random when `None`.
    ///
    /// Returns the adjusted plan and the season used.
    pub fn apply_season(
        &mut self,
        counts: &GenerationPlan,
        season: Option<Season>,
    ) -> (GenerationPlan, Season) {
        let season = season.unwrap_or_else(|| Season::random(&mut self.rng));
        debug!("Applying season '{}'.", season);
        (SeasonProfile::preset(season).apply(counts), season)
    }

    /// Run the count stage: sample all counts, then apply the configured season.
    pub fn plan(&mut self) -> PlannedRun {
        let base_counts = self.get_all_counts();
        let (counts, season) = match self.season {
            SeasonSelection::Off => (base_counts, None),
            SeasonSelection::Random => {
                let (c, s) = self.apply_season(&base_counts, None);
                (c, Some(s))
            }
            SeasonSelection::Fixed(season) => {
                let (c, s) = self.apply_season(&base_counts, Some(season));
                (c, Some(s))
            }
        };

        for (category, n) in counts.iter() {
            debug!("  {}: {} (base {}).", category, n, base_counts.count(category));
        }
        info!(
            "Planned {} objects | density: {} | season: {}.",
            counts.total(),
            self.density,
            season.map_or("none", Season::name),
        );

        PlannedRun {
            counts,
            base_counts,
            season,
            density: self.density,
            seed: self.seed,
            seed_fixed: self.seed_fixed,
        }
    }

    pub fn random_position(&mut self) -> glam::Vec2 {
        self.diversity.random_position(&mut self.rng)
    }

    pub fn random_scale(&mut self) -> f32 {
        self.diversity.random_scale(&mut self.rng)
    }

    pub fn random_height(&mut self) -> f32 {
        self.diversity.random_height(&mut self.rng)
    }

    /// Rotation in radians.
    pub fn random_rotation(&mut self) -> f32 {
        self.diversity.random_rotation(&mut self.rng)
    }

    pub fn random_transform(&mut self) -> InstanceTransform {
        self.diversity.random_transform(&mut self.rng)
    }

    /// Bernoulli gate for secondary decoration.
    pub fn should_generate_cluster(&mut self, probability: f64) -> bool {
        bernoulli(&mut self.rng, probability)
    }

    /// [`Planner::should_generate_cluster`] with [`DEFAULT_CLUSTER_PROBABILITY`].
    pub fn should_generate_cluster_default(&mut self) -> bool {
        self.should_generate_cluster(DEFAULT_CLUSTER_PROBABILITY)
    }

    /// Fertility factor in [`DENSITY_MULTIPLIER_RANGE`].
    pub fn density_multiplier(&mut self) -> f32 {
        let (min, max) = DENSITY_MULTIPLIER_RANGE;
        uniform_f32(&mut self.rng, min, max)
    }
}

#![forbid(unsafe_code)]
//! forest_plan: seeded procedural planning for forest scenes.
//!
//! Modules:
//! - density: density tiers and per-category count ranges
//! - season: seasonal multipliers applied to sampled counts
//! - diversity: per-instance position, height, scale and rotation draws
//! - material: surface parameters sampled from colour variant lists
//! - planner: run configuration and the planner owning the randomness source
//! - plan: generation plans and the textual plan report
//! - scene: the scene-builder seam and the population driver
//!
//! For examples, see the `forest_plan_examples` crate.
pub mod category;
pub mod density;
pub mod diversity;
pub mod error;
pub mod material;
pub mod plan;
pub mod planner;
pub mod sampling;
pub mod scene;
pub mod season;

/// Convenient re-exports for common types. Import with `use forest_plan::prelude::*;`.
pub mod prelude {
    pub use crate::category::Category;
    pub use crate::density::{object_count_for_profile, CountRange, Density, DensityProfile};
    pub use crate::diversity::{
        DiversityRanges, InstanceTransform, PartTransform, RuntimeDiversity, TreeTransforms,
    };
    pub use crate::error::{Error, Result};
    pub use crate::material::{MaterialKind, MaterialPalette, MaterialParams};
    pub use crate::plan::{GenerationPlan, PlanReport, PlannedRun};
    pub use crate::planner::{
        Planner, PlannerConfig, SeasonSelection, DEFAULT_CLUSTER_PROBABILITY,
        DEFAULT_REPRODUCIBLE_SEED,
    };
    pub use crate::scene::populate::{
        populate, ForestPopulator, PopulateConfig, PopulateSummary, DEFAULT_COLLECTION,
    };
    pub use crate::scene::recording::{ObjectId, RecordingScene, SceneCommand};
    pub use crate::scene::{ObjectTransform, Primitive, SceneBuilder};
    pub use crate::season::{apply_season, Season, SeasonProfile};
}

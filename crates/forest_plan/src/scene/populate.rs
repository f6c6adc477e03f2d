//! Drive a [`SceneBuilder`] from a generation plan.
//!
//! [`ForestPopulator::run`] resets the run's collection, sets up the stage (timeline,
//! sun, camera, ground) and then builds every planned instance category by category
//! in canonical order. All parameters are drawn from the [`Planner`]'s randomness
//! source, so a seeded planner produces the same command stream every time.
use std::f32::consts::TAU;

use glam::Vec3;
use tracing::{debug, info};

use crate::category::Category;
use crate::diversity::{InstanceTransform, TreeTransforms};
use crate::error::{Error, Result};
use crate::material::{MaterialKind, MaterialPalette};
use crate::plan::GenerationPlan;
use crate::planner::{Planner, DEFAULT_CLUSTER_PROBABILITY};
use crate::sampling::uniform_f32;
use crate::scene::{ObjectTransform, Primitive, SceneBuilder};

pub const DEFAULT_COLLECTION: &str = "Procedural_Forest";

const SUN_LOCATION: Vec3 = Vec3::new(0.0, 0.0, 20.0);
const SUN_ENERGY: f32 = 5.0;
const CAMERA_LOCATION: Vec3 = Vec3::new(30.0, -30.0, 25.0);
const CAMERA_ROTATION_DEG: Vec3 = Vec3::new(55.0, 0.0, 45.0);

/// Extra ground beyond the placement square, in world units.
const GROUND_MARGIN: f32 = 5.0;
const CLOUD_RADIUS: (f32, f32) = (3.0, 6.0);
const CLOUD_DRIFT: (f32, f32) = (5.0, 10.0);
const BIRD_SIZE: f32 = 0.8;
/// Companions are scaled down by a factor from this interval.
const COMPANION_SCALE: (f32, f32) = (0.4, 0.7);

/// Configuration for populating a scene.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct PopulateConfig {
    /// Name of the collection the run owns.
    pub collection: String,
    /// Inclusive timeline range; animated objects are keyed at both ends.
    pub frame_range: (i32, i32),
    /// Half extent of the square clouds and birds are placed in.
    pub sky_extent: f32,
    /// Altitude interval of clouds and birds.
    pub sky_height: (f32, f32),
    /// Distance a bird covers over the timeline.
    pub flight_distance: f32,
    /// Chance that a rock, bush or flower gets a companion.
    pub cluster_probability: f64,
    /// Maximum offset of a companion from its primary, per axis.
    pub cluster_radius: f32,
    /// Colour variants for materials.
    pub palette: MaterialPalette,
}

impl Default for PopulateConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_owned(),
            frame_range: (1, 250),
            sky_extent: 20.0,
            sky_height: (10.0, 18.0),
            flight_distance: 30.0,
            cluster_probability: DEFAULT_CLUSTER_PROBABILITY,
            cluster_radius: 1.5,
            palette: MaterialPalette::default(),
        }
    }
}

impl PopulateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the collection name.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Sets the timeline range.
    pub fn with_frame_range(mut self, start: i32, end: i32) -> Self {
        self.frame_range = (start, end);
        self
    }

    /// Sets the sky placement box.
    pub fn with_sky(mut self, extent: f32, min_height: f32, max_height: f32) -> Self {
        self.sky_extent = extent;
        self.sky_height = (min_height, max_height);
        self
    }

    /// Sets the companion probability and offset.
    pub fn with_clustering(mut self, probability: f64, radius: f32) -> Self {
        self.cluster_probability = probability;
        self.cluster_radius = radius;
        self
    }

    /// Sets the material palette.
    pub fn with_palette(mut self, palette: MaterialPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.collection.is_empty() {
            return Err(Error::InvalidConfig("collection must not be empty".into()));
        }
        if self.frame_range.0 > self.frame_range.1 {
            return Err(Error::InvalidConfig(
                "frame_range start must be <= end".into(),
            ));
        }
        if !self.sky_extent.is_finite() || self.sky_extent < 0.0 {
            return Err(Error::InvalidConfig(
                "sky_extent must be finite and >= 0".into(),
            ));
        }
        let (lo, hi) = self.sky_height;
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(Error::InvalidConfig(
                "sky_height must be a finite, ordered interval".into(),
            ));
        }
        if !self.flight_distance.is_finite() {
            return Err(Error::InvalidConfig("flight_distance must be finite".into()));
        }
        if !(0.0..=1.0).contains(&self.cluster_probability) {
            return Err(Error::InvalidConfig(
                "cluster_probability must be in [0, 1]".into(),
            ));
        }
        if !self.cluster_radius.is_finite() || self.cluster_radius < 0.0 {
            return Err(Error::InvalidConfig(
                "cluster_radius must be finite and >= 0".into(),
            ));
        }
        Ok(())
    }
}

/// What a population run produced.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulateSummary {
    /// Primary instances built per category.
    pub instances: GenerationPlan,
    /// Scene objects created, counting every part and the ground.
    pub objects: usize,
    /// Companion objects spawned by the cluster gate.
    pub clusters: usize,
    /// Keyframes inserted.
    pub keyframes: usize,
}

pub struct ForestPopulator {
    /// Configuration applied to every run.
    pub config: PopulateConfig,
}

impl ForestPopulator {
    pub fn try_new(config: PopulateConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// # Panics
    ///
    /// Panics with the validation error if `config` is invalid.
    pub fn new(config: PopulateConfig) -> Self {
        Self::try_new(config).unwrap_or_else(|e| panic!("invalid populate configuration: {e}"))
    }

    /// Build `plan` into `builder`.
    ///
    /// Stops at the first host error; objects created before it stay in the collection.
    pub fn run<B: SceneBuilder>(
        &self,
        planner: &mut Planner,
        plan: &GenerationPlan,
        builder: &mut B,
    ) -> std::result::Result<PopulateSummary, B::Error> {
        let mut ctx = BuildContext {
            builder,
            config: &self.config,
            planner,
            summary: PopulateSummary::default(),
        };

        ctx.stage()?;
        for (category, count) in plan.iter() {
            debug!("Building {} {}.", count, category);
            for i in 0..count {
                match category {
                    Category::Trees => ctx.tree(i)?,
                    Category::Rocks => ctx.rock(i)?,
                    Category::Bushes => ctx.bush(i)?,
                    Category::Flowers => ctx.flower(i)?,
                    Category::Mushrooms => ctx.mushroom(i)?,
                    Category::Clouds => ctx.cloud(i)?,
                    Category::Birds => ctx.bird(i)?,
                }
                let placed = ctx.summary.instances.count(category) + 1;
                ctx.summary.instances.set(category, placed);
            }
        }

        let summary = ctx.summary;
        info!(
            "Populated '{}' | objects: {} | companions: {} | keyframes: {}.",
            self.config.collection, summary.objects, summary.clusters, summary.keyframes,
        );
        Ok(summary)
    }
}

/// Build `plan` into `builder` with `config`.
///
/// # Panics
///
/// Panics with the validation error if `config` is invalid; use
/// [`ForestPopulator::try_new`] to handle it instead.
pub fn populate<B: SceneBuilder>(
    planner: &mut Planner,
    plan: &GenerationPlan,
    config: &PopulateConfig,
    builder: &mut B,
) -> std::result::Result<PopulateSummary, B::Error> {
    ForestPopulator::new(config.clone()).run(planner, plan, builder)
}

struct BuildContext<'a, B: SceneBuilder> {
    builder: &'a mut B,
    config: &'a PopulateConfig,
    planner: &'a mut Planner,
    summary: PopulateSummary,
}

type Step<B> = std::result::Result<(), <B as SceneBuilder>::Error>;

impl<B: SceneBuilder> BuildContext<'_, B> {
    /// create -> link -> transform -> material
    fn object(
        &mut self,
        primitive: Primitive,
        name: &str,
        transform: &ObjectTransform,
        material: MaterialKind,
    ) -> std::result::Result<B::Handle, B::Error> {
        let handle = self.builder.create_primitive(primitive, name)?;
        self.builder.link(&handle)?;
        self.builder.set_transform(&handle, transform)?;
        let params = self.config.palette.sample(material, self.planner.rng());
        self.builder.assign_material(&handle, &params)?;
        self.summary.objects += 1;
        Ok(handle)
    }

    fn keyframe(
        &mut self,
        handle: &B::Handle,
        frame: i32,
        transform: &ObjectTransform,
    ) -> Step<B> {
        self.builder.keyframe(handle, frame, transform)?;
        self.summary.keyframes += 1;
        Ok(())
    }

    fn stage(&mut self) -> Step<B> {
        let (start, end) = self.config.frame_range;
        self.builder.reset(&self.config.collection)?;
        self.builder.set_frame_range(start, end)?;
        self.builder.add_light("Sun", SUN_LOCATION.into(), SUN_ENERGY)?;
        let rotation = Vec3::new(
            CAMERA_ROTATION_DEG.x.to_radians(),
            CAMERA_ROTATION_DEG.y.to_radians(),
            CAMERA_ROTATION_DEG.z.to_radians(),
        );
        self.builder
            .add_camera("Main_Camera", CAMERA_LOCATION.into(), rotation.into())?;

        let half = self.planner.diversity().ranges().pos_range + GROUND_MARGIN;
        let ground = ObjectTransform::upright(Vec3::ZERO, 0.0, Vec3::new(half, half, 1.0));
        self.object(Primitive::Plane, "Ground", &ground, MaterialKind::Ground)?;
        Ok(())
    }

    /// Offset and shrink `t` for a companion object. Consumes three draws.
    fn companion_of(&mut self, t: &InstanceTransform) -> InstanceTransform {
        let r = self.config.cluster_radius;
        let rng = self.planner.rng();
        let dx = uniform_f32(rng, -r, r);
        let dy = uniform_f32(rng, -r, r);
        let shrink = uniform_f32(rng, COMPANION_SCALE.0, COMPANION_SCALE.1);
        InstanceTransform {
            position: t.position + glam::Vec2::new(dx, dy),
            scale: t.scale * shrink,
            ..*t
        }
    }

    /// Runs the cluster gate after a primary and returns the companion transform if it fires.
    fn maybe_companion(&mut self, t: &InstanceTransform) -> Option<InstanceTransform> {
        if self
            .planner
            .should_generate_cluster(self.config.cluster_probability)
        {
            self.summary.clusters += 1;
            Some(self.companion_of(t))
        } else {
            None
        }
    }

    fn sky_position(&mut self) -> Vec3 {
        let e = self.config.sky_extent;
        let (lo, hi) = self.config.sky_height;
        let rng = self.planner.rng();
        let x = uniform_f32(rng, -e, e);
        let y = uniform_f32(rng, -e, e);
        let z = uniform_f32(rng, lo, hi);
        Vec3::new(x, y, z)
    }

    fn tree(&mut self, i: u32) -> Step<B> {
        let t = self.planner.random_transform();
        let tree = TreeTransforms::from_instance(&t);
        let trunk = ObjectTransform::from(&tree.trunk);
        let leaves = ObjectTransform::from(&tree.leaves);
        self.object(
            Primitive::Cylinder,
            &format!("Tree_Trunk_{i}"),
            &trunk,
            MaterialKind::Bark,
        )?;
        self.object(
            Primitive::Cone,
            &format!("Tree_Leaves_{i}"),
            &leaves,
            MaterialKind::Leaf,
        )?;
        Ok(())
    }

    fn rock_at(&mut self, name: &str, t: &InstanceTransform) -> Step<B> {
        let s = t.scale;
        let transform = ObjectTransform::upright(
            t.position.extend(0.25 * s),
            t.rotation,
            Vec3::new(0.8 * s, 0.7 * s, 0.5 * s),
        );
        self.object(Primitive::IcoSphere, name, &transform, MaterialKind::Rock)?;
        Ok(())
    }

    fn rock(&mut self, i: u32) -> Step<B> {
        let t = self.planner.random_transform();
        self.rock_at(&format!("Rock_{i}"), &t)?;
        if let Some(c) = self.maybe_companion(&t) {
            self.rock_at(&format!("Rock_{i}_Companion"), &c)?;
        }
        Ok(())
    }

    fn bush_at(&mut self, name: &str, t: &InstanceTransform) -> Step<B> {
        let s = t.scale;
        let transform = ObjectTransform::upright(
            t.position.extend(0.5 * s),
            t.rotation,
            Vec3::new(s, s, 0.7 * s),
        );
        self.object(Primitive::UvSphere, name, &transform, MaterialKind::Bush)?;
        Ok(())
    }

    fn bush(&mut self, i: u32) -> Step<B> {
        let t = self.planner.random_transform();
        self.bush_at(&format!("Bush_{i}"), &t)?;
        if let Some(c) = self.maybe_companion(&t) {
            self.bush_at(&format!("Bush_{i}_Companion"), &c)?;
        }
        Ok(())
    }

    fn flower_at(&mut self, name: &str, t: &InstanceTransform) -> Step<B> {
        let s = t.scale;
        let stem_h = 0.3 * s;
        let stem = ObjectTransform::upright(
            t.position.extend(stem_h / 2.0),
            0.0,
            Vec3::new(0.03, 0.03, stem_h),
        );
        let petal = ObjectTransform::upright(
            t.position.extend(stem_h),
            t.rotation,
            Vec3::new(0.12 * s, 0.12 * s, 0.05 * s),
        );
        self.object(
            Primitive::Cylinder,
            &format!("{name}_Stem"),
            &stem,
            MaterialKind::FlowerStem,
        )?;
        self.object(
            Primitive::UvSphere,
            &format!("{name}_Petal"),
            &petal,
            MaterialKind::FlowerPetal,
        )?;
        Ok(())
    }

    fn flower(&mut self, i: u32) -> Step<B> {
        let t = self.planner.random_transform();
        self.flower_at(&format!("Flower_{i}"), &t)?;
        if let Some(c) = self.maybe_companion(&t) {
            self.flower_at(&format!("Flower_{i}_Companion"), &c)?;
        }
        Ok(())
    }

    fn mushroom(&mut self, i: u32) -> Step<B> {
        let t = self.planner.random_transform();
        let s = t.scale;
        let stalk = ObjectTransform::upright(
            t.position.extend(0.1 * s),
            0.0,
            Vec3::new(0.05 * s, 0.05 * s, 0.2 * s),
        );
        let cap = ObjectTransform::upright(
            t.position.extend(0.2 * s),
            t.rotation,
            Vec3::new(0.15 * s, 0.15 * s, 0.07 * s),
        );
        self.object(
            Primitive::Cylinder,
            &format!("Mushroom_Stalk_{i}"),
            &stalk,
            MaterialKind::MushroomStalk,
        )?;
        self.object(
            Primitive::UvSphere,
            &format!("Mushroom_Cap_{i}"),
            &cap,
            MaterialKind::MushroomCap,
        )?;
        Ok(())
    }

    fn cloud(&mut self, i: u32) -> Step<B> {
        let start = self.sky_position();
        let rng = self.planner.rng();
        let radius = uniform_f32(rng, CLOUD_RADIUS.0, CLOUD_RADIUS.1);
        let stretch = Vec3::new(
            uniform_f32(rng, 1.5, 2.5),
            uniform_f32(rng, 1.2, 2.0),
            uniform_f32(rng, 0.4, 0.7),
        );
        let drift = uniform_f32(rng, CLOUD_DRIFT.0, CLOUD_DRIFT.1);

        let at_start = ObjectTransform::upright(start, 0.0, stretch * radius);
        let at_end = at_start.with_location(start + Vec3::new(drift, 0.0, 0.0));
        let handle = self.object(
            Primitive::UvSphere,
            &format!("Cloud_{i}"),
            &at_start,
            MaterialKind::Cloud,
        )?;
        let (first, last) = self.config.frame_range;
        self.keyframe(&handle, first, &at_start)?;
        self.keyframe(&handle, last, &at_end)?;
        Ok(())
    }

    fn bird(&mut self, i: u32) -> Step<B> {
        let start = self.sky_position();
        let heading = uniform_f32(self.planner.rng(), 0.0, TAU);
        let scale = Vec3::new(1.5, 0.3, 0.2) * BIRD_SIZE;
        let at_start = ObjectTransform::upright(start, heading, scale);
        let direction = Vec3::new(heading.cos(), heading.sin(), 0.0);
        let at_end = at_start.with_location(start + direction * self.config.flight_distance);

        let handle = self.object(
            Primitive::Cube,
            &format!("Bird_{i}"),
            &at_start,
            MaterialKind::Bird,
        )?;
        let (first, last) = self.config.frame_range;
        self.keyframe(&handle, first, &at_start)?;
        self.keyframe(&handle, last, &at_end)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::recording::{RecordingScene, SceneCommand};

    fn one_of_each() -> GenerationPlan {
        GenerationPlan::from_counts(Category::ALL.into_iter().map(|c| (c, 1)))
    }

    fn no_clusters() -> PopulateConfig {
        PopulateConfig::default().with_clustering(0.0, 1.0)
    }

    #[test]
    fn stage_comes_first() {
        let mut planner = Planner::reproducible(1);
        let mut scene = RecordingScene::new();
        populate(&mut planner, &GenerationPlan::new(), &no_clusters(), &mut scene).unwrap();

        let cmds = scene.as_slice();
        assert!(matches!(
            cmds[0],
            SceneCommand::Reset { ref collection } if collection == DEFAULT_COLLECTION
        ));
        assert!(matches!(cmds[1], SceneCommand::FrameRange { start: 1, end: 250 }));
        assert!(matches!(cmds[2], SceneCommand::Light { energy, .. } if energy == 5.0));
        assert!(matches!(cmds[3], SceneCommand::Camera { .. }));
        assert_eq!(scene.object_names().collect::<Vec<_>>(), vec!["Ground"]);
    }

    #[test]
    fn every_object_follows_fixed_sequence() {
        let mut planner = Planner::reproducible(2);
        let mut scene = RecordingScene::new();
        populate(&mut planner, &one_of_each(), &no_clusters(), &mut scene).unwrap();

        for id in 0..scene.object_count() {
            let kinds: Vec<&str> = scene
                .commands_for(crate::scene::recording::ObjectId(id))
                .map(|c| match c {
                    SceneCommand::Create { .. } => "create",
                    SceneCommand::Link { .. } => "link",
                    SceneCommand::Transform { .. } => "transform",
                    SceneCommand::Material { .. } => "material",
                    SceneCommand::Keyframe { .. } => "keyframe",
                    _ => "other",
                })
                .collect();
            assert_eq!(&kinds[..4], &["create", "link", "transform", "material"]);
            assert!(kinds[4..].iter().all(|k| *k == "keyframe"));
        }
    }

    #[test]
    fn summary_counts_parts_and_keyframes() {
        let mut planner = Planner::reproducible(3);
        let mut scene = RecordingScene::new();
        let summary = populate(&mut planner, &one_of_each(), &no_clusters(), &mut scene).unwrap();

        assert_eq!(summary.instances, one_of_each());
        // ground + tree(2) + rock + bush + flower(2) + mushroom(2) + cloud + bird
        assert_eq!(summary.objects, 11);
        assert_eq!(summary.objects, scene.object_count());
        assert_eq!(summary.clusters, 0);
        assert_eq!(summary.keyframes, 4);
    }

    #[test]
    fn certain_clusters_double_decorations() {
        let plan = GenerationPlan::new()
            .with_count(Category::Rocks, 3)
            .with_count(Category::Bushes, 2)
            .with_count(Category::Flowers, 1);
        let config = PopulateConfig::default().with_clustering(1.0, 1.0);
        let mut planner = Planner::reproducible(4);
        let mut scene = RecordingScene::new();
        let summary = populate(&mut planner, &plan, &config, &mut scene).unwrap();

        assert_eq!(summary.clusters, 6);
        assert_eq!(summary.instances, plan);
        assert!(scene.object_names().any(|n| n == "Rock_2_Companion"));
        // ground + 6 rocks + 4 bushes + 2 flowers * 2 parts
        assert_eq!(summary.objects, 15);
    }

    #[test]
    fn sky_objects_stay_in_sky_box_and_animate_over_timeline() {
        let plan = GenerationPlan::new()
            .with_count(Category::Clouds, 5)
            .with_count(Category::Birds, 5);
        let config = no_clusters().with_frame_range(10, 90);
        let mut planner = Planner::reproducible(5);
        let mut scene = RecordingScene::new();
        populate(&mut planner, &plan, &config, &mut scene).unwrap();

        let mut frames = Vec::new();
        for cmd in scene.as_slice() {
            match cmd {
                SceneCommand::Transform { id, transform } if id.0 > 0 => {
                    let p = transform.location_vec3();
                    assert!(p.x.abs() <= 20.0 && p.y.abs() <= 20.0);
                    assert!((10.0..=18.0).contains(&p.z));
                }
                SceneCommand::Keyframe { frame, .. } => frames.push(*frame),
                _ => {}
            }
        }
        assert_eq!(frames.len(), 20);
        assert!(frames.iter().all(|f| *f == 10 || *f == 90));
    }

    #[test]
    fn same_seed_same_commands() {
        let run = |seed| {
            let mut planner = Planner::reproducible(seed);
            let plan = planner.get_all_counts();
            let mut scene = RecordingScene::new();
            populate(&mut planner, &plan, &PopulateConfig::default(), &mut scene).unwrap();
            scene.into_inner()
        };
        assert_eq!(run(9), run(9));
        assert_ne!(run(9), run(10));
    }

    #[test]
    fn unit_builder_consumes_same_stream() {
        let plan = one_of_each();
        let mut a = Planner::reproducible(6);
        let mut b = Planner::reproducible(6);
        populate(&mut a, &plan, &PopulateConfig::default(), &mut ()).unwrap();
        populate(&mut b, &plan, &PopulateConfig::default(), &mut RecordingScene::new()).unwrap();
        assert_eq!(a.random_transform(), b.random_transform());
    }

    #[test]
    fn host_errors_stop_the_run() {
        struct FailOnCreate {
            created: usize,
            limit: usize,
        }

        impl SceneBuilder for FailOnCreate {
            type Handle = usize;
            type Error = String;

            fn reset(&mut self, _c: &str) -> std::result::Result<(), String> {
                Ok(())
            }
            fn set_frame_range(&mut self, _s: i32, _e: i32) -> std::result::Result<(), String> {
                Ok(())
            }
            fn create_primitive(
                &mut self,
                _p: Primitive,
                name: &str,
            ) -> std::result::Result<usize, String> {
                if self.created == self.limit {
                    return Err(format!("cannot create {name}"));
                }
                self.created += 1;
                Ok(self.created)
            }
            fn link(&mut self, _o: &usize) -> std::result::Result<(), String> {
                Ok(())
            }
            fn set_transform(
                &mut self,
                _o: &usize,
                _t: &ObjectTransform,
            ) -> std::result::Result<(), String> {
                Ok(())
            }
            fn assign_material(
                &mut self,
                _o: &usize,
                _m: &crate::material::MaterialParams,
            ) -> std::result::Result<(), String> {
                Ok(())
            }
            fn keyframe(
                &mut self,
                _o: &usize,
                _f: i32,
                _t: &ObjectTransform,
            ) -> std::result::Result<(), String> {
                Ok(())
            }
            fn add_light(
                &mut self,
                _n: &str,
                _l: mint::Vector3<f32>,
                _e: f32,
            ) -> std::result::Result<(), String> {
                Ok(())
            }
            fn add_camera(
                &mut self,
                _n: &str,
                _l: mint::Vector3<f32>,
                _r: mint::Vector3<f32>,
            ) -> std::result::Result<(), String> {
                Ok(())
            }
        }

        let mut planner = Planner::reproducible(7);
        let mut host = FailOnCreate {
            created: 0,
            limit: 2,
        };
        let err = populate(&mut planner, &one_of_each(), &no_clusters(), &mut host).unwrap_err();
        assert_eq!(err, "cannot create Tree_Leaves_0");
    }

    #[test]
    fn validate_rejects_bad_settings() {
        assert!(PopulateConfig::default().validate().is_ok());
        assert!(PopulateConfig::default()
            .with_frame_range(10, 1)
            .validate()
            .is_err());
        assert!(PopulateConfig::default()
            .with_clustering(1.5, 1.0)
            .validate()
            .is_err());
        assert!(PopulateConfig::default()
            .with_sky(20.0, 18.0, 10.0)
            .validate()
            .is_err());
        assert!(ForestPopulator::try_new(PopulateConfig::default().with_collection("")).is_err());
    }

    #[test]
    fn negative_cluster_radius_is_a_config_error() {
        let config = PopulateConfig::default().with_clustering(1.0, -1.0);
        assert!(matches!(
            ForestPopulator::try_new(config),
            Err(Error::InvalidConfig(msg)) if msg.contains("cluster_radius")
        ));
    }

    #[test]
    #[should_panic(expected = "invalid populate configuration: invalid configuration: cluster_radius")]
    fn populate_refuses_negative_cluster_radius() {
        let mut planner = Planner::reproducible(1);
        let mut scene = RecordingScene::new();
        let plan = GenerationPlan::new().with_count(Category::Rocks, 1);
        let config = PopulateConfig::default().with_clustering(1.0, -1.0);
        let _ = populate(&mut planner, &plan, &config, &mut scene);
    }
}

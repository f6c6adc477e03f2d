//! Surface parameters for the materials a forest scene uses.
//!
//! Each [`MaterialKind`] picks a base colour from a variant list, optionally jitters
//! it, and draws its shading scalars from fixed intervals. The result is a plain
//! [`MaterialParams`] value; building the actual shader graph is up to the
//! [`crate::scene::SceneBuilder`] adapter.
use std::fmt;

use rand::RngCore;

use crate::sampling::{choose, uniform_f32, uniform_u32_inclusive};

pub type Rgb = [f32; 3];
pub type Rgba = [f32; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Bark,
    Leaf,
    Ground,
    Rock,
    Bush,
    FlowerPetal,
    FlowerStem,
    MushroomCap,
    MushroomStalk,
    Cloud,
    Bird,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 11] = [
        MaterialKind::Bark,
        MaterialKind::Leaf,
        MaterialKind::Ground,
        MaterialKind::Rock,
        MaterialKind::Bush,
        MaterialKind::FlowerPetal,
        MaterialKind::FlowerStem,
        MaterialKind::MushroomCap,
        MaterialKind::MushroomStalk,
        MaterialKind::Cloud,
        MaterialKind::Bird,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MaterialKind::Bark => "Bark",
            MaterialKind::Leaf => "Leaf",
            MaterialKind::Ground => "Ground",
            MaterialKind::Rock => "Rock",
            MaterialKind::Bush => "Bush",
            MaterialKind::FlowerPetal => "Flower_Petal",
            MaterialKind::FlowerStem => "Flower_Stem",
            MaterialKind::MushroomCap => "Mushroom_Cap",
            MaterialKind::MushroomStalk => "Mushroom_Stalk",
            MaterialKind::Cloud => "Cloud",
            MaterialKind::Bird => "Bird",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Principled-surface inputs for one material instance.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialParams {
    pub kind: MaterialKind,
    /// Unique-ish name, `"<Kind>_Material_<nnnn>"`.
    pub name: String,
    /// Linear RGBA, each channel in `[0, 1]`.
    pub base_color: Rgba,
    pub roughness: f32,
    pub specular: Option<f32>,
    pub subsurface: Option<f32>,
}

/// Colour variant lists the sampler chooses from.
#[derive(Debug, Clone)]
pub struct MaterialPalette {
    pub bark: Vec<Rgb>,
    pub leaf: Vec<Rgb>,
    pub ground: Vec<Rgb>,
    pub rock: Vec<Rgb>,
    pub bush: Vec<Rgb>,
    pub flower: Vec<Rgb>,
    pub mushroom_cap: Vec<Rgb>,
}

impl Default for MaterialPalette {
    fn default() -> Self {
        Self {
            bark: vec![
                [0.25, 0.15, 0.08],
                [0.15, 0.08, 0.03],
                [0.30, 0.20, 0.10],
                [0.12, 0.08, 0.05],
                [0.20, 0.12, 0.08],
            ],
            leaf: vec![[0.03, 0.25, 0.03], [0.04, 0.30, 0.04], [0.05, 0.35, 0.05]],
            ground: vec![[0.15, 0.25, 0.10], [0.20, 0.30, 0.12], [0.12, 0.20, 0.08]],
            rock: vec![
                [0.30, 0.30, 0.30], // light gray
                [0.20, 0.20, 0.20],
                [0.15, 0.15, 0.15],
                [0.25, 0.22, 0.18], // brown-gray
                [0.18, 0.18, 0.20], // blue-gray
            ],
            bush: vec![
                [0.08, 0.40, 0.08],
                [0.12, 0.50, 0.10],
                [0.15, 0.55, 0.12],
                [0.10, 0.45, 0.15],
            ],
            flower: vec![
                [0.90, 0.20, 0.30], // red
                [0.95, 0.70, 0.20], // yellow
                [0.80, 0.30, 0.80], // purple
                [1.00, 0.50, 0.00], // orange
                [0.90, 0.10, 0.50], // pink
                [1.00, 1.00, 0.90], // white
            ],
            mushroom_cap: vec![
                [0.80, 0.20, 0.20],
                [0.90, 0.60, 0.30],
                [0.70, 0.50, 0.30],
                [0.95, 0.95, 0.90],
            ],
        }
    }
}

const FLOWER_STEM_COLOR: Rgb = [0.1, 0.4, 0.1];
const MUSHROOM_STALK_COLOR: Rgb = [0.9, 0.88, 0.85];
const FALLBACK_COLOR: Rgb = [0.5, 0.5, 0.5];

impl MaterialPalette {
    /// Sample a material of `kind`.
    ///
    /// Draw order is fixed per kind: name suffix, base colour, colour jitter, then
    /// shading scalars.
    pub fn sample(&self, kind: MaterialKind, rng: &mut dyn RngCore) -> MaterialParams {
        let name = format!(
            "{}_Material_{}",
            kind.name(),
            uniform_u32_inclusive(rng, 1000, 9999)
        );

        let (base_color, roughness, specular, subsurface) = match kind {
            MaterialKind::Bark => {
                let base = pick(&self.bark, rng);
                let shift = uniform_f32(rng, -0.05, 0.08);
                let color = shifted(base, [shift, shift, shift]);
                let roughness = uniform_f32(rng, 0.6, 0.95);
                let specular = uniform_f32(rng, 0.1, 0.4);
                (color, roughness, Some(specular), None)
            }
            MaterialKind::Leaf => {
                let base = pick(&self.leaf, rng);
                let hue = uniform_f32(rng, -0.08, 0.12);
                let brightness = uniform_f32(rng, -0.10, 0.15);
                let color = shifted(base, [hue, brightness, hue]);
                let roughness = uniform_f32(rng, 0.2, 0.7);
                let subsurface = uniform_f32(rng, 0.15, 0.4);
                (color, roughness, None, Some(subsurface))
            }
            MaterialKind::Ground => (pick(&self.ground, rng), 0.85, None, None),
            MaterialKind::Rock => {
                let base = pick(&self.rock, rng);
                let v = uniform_f32(rng, -0.03, 0.03);
                let color = shifted(base, [v, v, v]);
                let roughness = uniform_f32(rng, 0.8, 1.0);
                let specular = uniform_f32(rng, 0.05, 0.15);
                (color, roughness, Some(specular), None)
            }
            MaterialKind::Bush => {
                let base = pick(&self.bush, rng);
                let v = uniform_f32(rng, -0.05, 0.08);
                let color = shifted(base, [v, v, v]);
                let roughness = uniform_f32(rng, 0.4, 0.7);
                let subsurface = uniform_f32(rng, 0.2, 0.4);
                (color, roughness, None, Some(subsurface))
            }
            MaterialKind::FlowerPetal => {
                let color = pick(&self.flower, rng);
                let roughness = uniform_f32(rng, 0.3, 0.6);
                let specular = uniform_f32(rng, 0.4, 0.7);
                let subsurface = uniform_f32(rng, 0.3, 0.5);
                (color, roughness, Some(specular), Some(subsurface))
            }
            MaterialKind::FlowerStem => (FLOWER_STEM_COLOR, 0.6, None, None),
            MaterialKind::MushroomCap => {
                let color = pick(&self.mushroom_cap, rng);
                let roughness = uniform_f32(rng, 0.4, 0.7);
                let specular = uniform_f32(rng, 0.3, 0.5);
                (color, roughness, Some(specular), None)
            }
            MaterialKind::MushroomStalk => (MUSHROOM_STALK_COLOR, 0.7, None, None),
            MaterialKind::Cloud => {
                let w = uniform_f32(rng, 0.85, 0.98);
                ([w, w, w], 0.9, None, Some(0.3))
            }
            MaterialKind::Bird => {
                let d = uniform_f32(rng, 0.05, 0.15);
                ([d, d * 0.8, d * 0.6], 0.7, None, None)
            }
        };

        MaterialParams {
            kind,
            name,
            base_color: opaque(base_color),
            roughness,
            specular,
            subsurface,
        }
    }
}

fn pick(variants: &[Rgb], rng: &mut dyn RngCore) -> Rgb {
    choose(rng, variants).copied().unwrap_or(FALLBACK_COLOR)
}

fn shifted(base: Rgb, delta: Rgb) -> Rgb {
    [
        (base[0] + delta[0]).clamp(0.0, 1.0),
        (base[1] + delta[1]).clamp(0.0, 1.0),
        (base[2] + delta[2]).clamp(0.0, 1.0),
    ]
}

#[inline]
fn opaque(c: Rgb) -> Rgba {
    [c[0], c[1], c[2], 1.0]
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn colors_stay_in_unit_range() {
        let palette = MaterialPalette::default();
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..200 {
            for kind in MaterialKind::ALL {
                let m = palette.sample(kind, &mut rng);
                assert!(
                    m.base_color.iter().all(|c| (0.0..=1.0).contains(c)),
                    "{kind}: {:?}",
                    m.base_color
                );
                assert_eq!(m.base_color[3], 1.0);
                assert!((0.0..=1.0).contains(&m.roughness));
            }
        }
    }

    #[test]
    fn names_carry_kind_and_four_digit_suffix() {
        let palette = MaterialPalette::default();
        let mut rng = StdRng::seed_from_u64(2);
        let m = palette.sample(MaterialKind::MushroomCap, &mut rng);
        let suffix = m
            .name
            .strip_prefix("Mushroom_Cap_Material_")
            .expect("prefix");
        let n: u32 = suffix.parse().unwrap();
        assert!((1000..=9999).contains(&n));
    }

    #[test]
    fn fixed_materials_use_constants() {
        let palette = MaterialPalette::default();
        let mut rng = StdRng::seed_from_u64(4);
        let stem = palette.sample(MaterialKind::FlowerStem, &mut rng);
        assert_eq!(stem.base_color, [0.1, 0.4, 0.1, 1.0]);
        assert_eq!(stem.roughness, 0.6);
        let stalk = palette.sample(MaterialKind::MushroomStalk, &mut rng);
        assert_eq!(stalk.roughness, 0.7);
        assert!(stalk.specular.is_none() && stalk.subsurface.is_none());
    }

    #[test]
    fn bird_is_dark_and_warm() {
        let palette = MaterialPalette::default();
        let mut rng = StdRng::seed_from_u64(6);
        let bird = palette.sample(MaterialKind::Bird, &mut rng);
        let [r, g, b, _] = bird.base_color;
        assert!(r >= 0.05 && r <= 0.15);
        assert!(g < r && b < g);
    }

    #[test]
    fn empty_variant_list_uses_fallback() {
        let palette = MaterialPalette {
            rock: Vec::new(),
            ..MaterialPalette::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let rock = palette.sample(MaterialKind::Rock, &mut rng);
        for c in &rock.base_color[..3] {
            assert!((0.47..=0.53).contains(c));
        }
    }

    #[test]
    fn same_seed_same_material() {
        let palette = MaterialPalette::default();
        let mut a = StdRng::seed_from_u64(100);
        let mut b = StdRng::seed_from_u64(100);
        assert_eq!(
            palette.sample(MaterialKind::Leaf, &mut a),
            palette.sample(MaterialKind::Leaf, &mut b)
        );
    }
}

//! Per-instance continuous parameters: position, height, scale and rotation.
//!
//! [`RuntimeDiversity`] holds the configured intervals and draws from a generator
//! borrowed per call. The four draws are independent; nothing correlates an
//! instance's position with its scale. With a seeded generator the sequence of
//! draws is reproducible as long as the calls happen in the same order.
use glam::{Vec2, Vec3};
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sampling::uniform_f32;

/// Sampling intervals for instance transforms.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiversityRanges {
    /// Half extent of the square positions are drawn from.
    pub pos_range: f32,
    /// Uniform scale interval `(min, max)`.
    pub scale: (f32, f32),
    /// Height interval `(min, max)` in world units.
    pub height: (f32, f32),
    /// Rotation interval `(min, max)` in degrees.
    pub rotation_deg: (f32, f32),
}

impl Default for DiversityRanges {
    fn default() -> Self {
        Self {
            pos_range: 15.0,
            scale: (0.7, 1.3),
            height: (2.0, 5.0),
            rotation_deg: (0.0, 360.0),
        }
    }
}

impl DiversityRanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the half extent of the placement square.
    pub fn with_pos_range(mut self, pos_range: f32) -> Self {
        self.pos_range = pos_range;
        self
    }

    /// Sets the scale interval.
    pub fn with_scale(mut self, min: f32, max: f32) -> Self {
        self.scale = (min, max);
        self
    }

    /// Sets the height interval.
    pub fn with_height(mut self, min: f32, max: f32) -> Self {
        self.height = (min, max);
        self
    }

    /// Sets the rotation interval in degrees.
    pub fn with_rotation_deg(mut self, min: f32, max: f32) -> Self {
        self.rotation_deg = (min, max);
        self
    }

    /// Validates the ranges, returning an error if any is malformed.
    pub fn validate(&self) -> Result<()> {
        if !self.pos_range.is_finite() || self.pos_range < 0.0 {
            return Err(Error::InvalidConfig(
                "pos_range must be finite and >= 0".into(),
            ));
        }
        check_interval("scale", self.scale)?;
        check_interval("height", self.height)?;
        check_interval("rotation_deg", self.rotation_deg)?;
        Ok(())
    }
}

fn check_interval(name: &str, (min, max): (f32, f32)) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(Error::InvalidConfig(format!("{name} bounds must be finite")));
    }
    if min > max {
        return Err(Error::InvalidConfig(format!(
            "{name} interval is inverted: [{min}, {max}]"
        )));
    }
    Ok(())
}

/// Sampled attributes for one placed object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceTransform {
    /// Ground-plane position.
    pub position: Vec2,
    pub height: f32,
    pub scale: f32,
    /// Rotation about the vertical axis in radians.
    pub rotation: f32,
}

/// Draws instance parameters from configured intervals.
#[derive(Debug, Clone, Default)]
pub struct RuntimeDiversity {
    ranges: DiversityRanges,
}

impl RuntimeDiversity {
    pub fn try_new(ranges: DiversityRanges) -> Result<Self> {
        ranges.validate()?;
        Ok(Self { ranges })
    }

    pub fn new(ranges: DiversityRanges) -> Self {
        debug_assert!(ranges.validate().is_ok(), "invalid diversity ranges");
        Self { ranges }
    }

    pub fn ranges(&self) -> &DiversityRanges {
        &self.ranges
    }

    /// Position with each axis uniform in `[-pos_range, pos_range]`. Consumes two draws.
    pub fn random_position(&self, rng: &mut dyn RngCore) -> Vec2 {
        let r = self.ranges.pos_range;
        let x = uniform_f32(rng, -r, r);
        let y = uniform_f32(rng, -r, r);
        Vec2::new(x, y)
    }

    pub fn random_scale(&self, rng: &mut dyn RngCore) -> f32 {
        let (min, max) = self.ranges.scale;
        uniform_f32(rng, min, max)
    }

    pub fn random_height(&self, rng: &mut dyn RngCore) -> f32 {
        let (min, max) = self.ranges.height;
        uniform_f32(rng, min, max)
    }

    /// Rotation drawn in degrees and returned in radians.
    pub fn random_rotation(&self, rng: &mut dyn RngCore) -> f32 {
        let (min, max) = self.ranges.rotation_deg;
        uniform_f32(rng, min, max).to_radians()
    }

    /// Draw a full transform: position, height, scale, rotation, in that order.
    pub fn random_transform(&self, rng: &mut dyn RngCore) -> InstanceTransform {
        let position = self.random_position(rng);
        let height = self.random_height(rng);
        let scale = self.random_scale(rng);
        let rotation = self.random_rotation(rng);
        InstanceTransform {
            position,
            height,
            scale,
            rotation,
        }
    }
}

/// Location, scale and Z rotation of one mesh part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartTransform {
    pub location: Vec3,
    pub scale: Vec3,
    pub rotation_z: f32,
}

/// Trunk and crown placement derived from one [`InstanceTransform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeTransforms {
    pub trunk: PartTransform,
    pub leaves: PartTransform,
}

impl TreeTransforms {
    /// Stand the trunk on the ground and put the crown above it.
    ///
    /// Trunk: centered at half height, scaled `(s, s, h)`. Leaves: at `2h`, scaled
    /// `(2.5 s, 2.5 s, 1.1 h)` and rotated about Z. The trunk itself is not rotated.
    pub fn from_instance(t: &InstanceTransform) -> Self {
        let (x, y) = (t.position.x, t.position.y);
        let (h, s) = (t.height, t.scale);
        Self {
            trunk: PartTransform {
                location: Vec3::new(x, y, h / 2.0),
                scale: Vec3::new(s, s, h),
                rotation_z: 0.0,
            },
            leaves: PartTransform {
                location: Vec3::new(x, y, h * 2.0),
                scale: Vec3::new(s * 2.5, s * 2.5, h * 1.1),
                rotation_z: t.rotation,
            },
        }
    }
}

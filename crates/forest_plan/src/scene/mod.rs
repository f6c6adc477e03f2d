//! The seam between planning and a host scene graph.
//!
//! [`SceneBuilder`] enumerates the few host operations a forest run needs: reset a
//! collection, set the timeline, create a primitive, link it, transform it, give it
//! a material and keyframe it, plus the stage light and camera. A host supplies an
//! adapter; [`populate::populate`] drives it from a [`crate::plan::GenerationPlan`].
//!
//! Vectors cross the seam as [`mint`] types so adapters are not tied to this crate's
//! glam version.
use glam::Vec3;
use mint::Vector3;

use crate::diversity::PartTransform;
use crate::material::MaterialParams;

pub mod populate;
pub mod recording;

/// Mesh primitive the host is asked to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Plane,
    Cube,
    Cylinder,
    Cone,
    UvSphere,
    IcoSphere,
}

/// Location, Euler rotation (radians, XYZ) and scale of one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTransform {
    pub location: Vector3<f32>,
    pub rotation_euler: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl ObjectTransform {
    pub fn new(location: Vec3, rotation_euler: Vec3, scale: Vec3) -> Self {
        Self {
            location: location.into(),
            rotation_euler: rotation_euler.into(),
            scale: scale.into(),
        }
    }

    /// Transform rotated about Z only.
    pub fn upright(location: Vec3, rotation_z: f32, scale: Vec3) -> Self {
        Self::new(location, Vec3::new(0.0, 0.0, rotation_z), scale)
    }

    /// Copy with a different location.
    pub fn with_location(mut self, location: Vec3) -> Self {
        self.location = location.into();
        self
    }

    pub fn location_vec3(&self) -> Vec3 {
        self.location.into()
    }

    pub fn scale_vec3(&self) -> Vec3 {
        self.scale.into()
    }
}

impl From<&PartTransform> for ObjectTransform {
    fn from(part: &PartTransform) -> Self {
        Self::upright(part.location, part.rotation_z, part.scale)
    }
}

/// Host operations consumed by a forest run.
///
/// Calls arrive in a fixed order per object: [`create_primitive`](Self::create_primitive),
/// [`link`](Self::link), [`set_transform`](Self::set_transform),
/// [`assign_material`](Self::assign_material), then zero or more
/// [`keyframe`](Self::keyframe)s.
pub trait SceneBuilder {
    /// Host-side reference to a created object.
    type Handle;
    /// Failure reported by the host.
    type Error;

    /// Remove the previous run's collection and start a fresh, empty one.
    fn reset(&mut self, collection: &str) -> Result<(), Self::Error>;

    /// Set the animation range, inclusive on both ends.
    fn set_frame_range(&mut self, start: i32, end: i32) -> Result<(), Self::Error>;

    fn create_primitive(
        &mut self,
        primitive: Primitive,
        name: &str,
    ) -> Result<Self::Handle, Self::Error>;

    /// Move the object into the run's collection.
    fn link(&mut self, object: &Self::Handle) -> Result<(), Self::Error>;

    fn set_transform(
        &mut self,
        object: &Self::Handle,
        transform: &ObjectTransform,
    ) -> Result<(), Self::Error>;

    fn assign_material(
        &mut self,
        object: &Self::Handle,
        material: &MaterialParams,
    ) -> Result<(), Self::Error>;

    /// Record `transform` as the object's state at `frame`.
    fn keyframe(
        &mut self,
        object: &Self::Handle,
        frame: i32,
        transform: &ObjectTransform,
    ) -> Result<(), Self::Error>;

    fn add_light(
        &mut self,
        name: &str,
        location: Vector3<f32>,
        energy: f32,
    ) -> Result<(), Self::Error>;

    /// Add a camera and make it the active one.
    fn add_camera(
        &mut self,
        name: &str,
        location: Vector3<f32>,
        rotation_euler: Vector3<f32>,
    ) -> Result<(), Self::Error>;
}

/// A no-op builder. Useful to consume a run's random stream without a host.
impl SceneBuilder for () {
    type Handle = ();
    type Error = std::convert::Infallible;

    #[inline]
    fn reset(&mut self, _collection: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn set_frame_range(&mut self, _start: i32, _end: i32) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn create_primitive(&mut self, _primitive: Primitive, _name: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn link(&mut self, _object: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn set_transform(
        &mut self,
        _object: &(),
        _transform: &ObjectTransform,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn assign_material(
        &mut self,
        _object: &(),
        _material: &MaterialParams,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn keyframe(
        &mut self,
        _object: &(),
        _frame: i32,
        _transform: &ObjectTransform,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn add_light(
        &mut self,
        _name: &str,
        _location: Vector3<f32>,
        _energy: f32,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn add_camera(
        &mut self,
        _name: &str,
        _location: Vector3<f32>,
        _rotation_euler: Vector3<f32>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_transform_converts_to_upright_object() {
        let part = PartTransform {
            location: Vec3::new(1.0, 2.0, 3.0),
            scale: Vec3::splat(2.0),
            rotation_z: 0.25,
        };
        let t = ObjectTransform::from(&part);
        assert_eq!(t.location_vec3(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.scale_vec3(), Vec3::splat(2.0));
        assert_eq!(Vec3::from(t.rotation_euler), Vec3::new(0.0, 0.0, 0.25));
    }

    #[test]
    fn with_location_keeps_rotation_and_scale() {
        let t = ObjectTransform::upright(Vec3::ZERO, 1.0, Vec3::ONE).with_location(Vec3::X);
        assert_eq!(t.location_vec3(), Vec3::X);
        assert_eq!(t.scale_vec3(), Vec3::ONE);
        assert_eq!(t.rotation_euler.z, 1.0);
    }
}

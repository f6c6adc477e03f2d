//! In-memory [`SceneBuilder`] that records every call.
use std::convert::Infallible;

use mint::Vector3;

use crate::material::MaterialParams;
use crate::scene::{ObjectTransform, Primitive, SceneBuilder};

/// Handle issued by [`RecordingScene`]: index of the object in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

/// One recorded builder call.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    Reset {
        collection: String,
    },
    FrameRange {
        start: i32,
        end: i32,
    },
    Create {
        id: ObjectId,
        primitive: Primitive,
        name: String,
    },
    Link {
        id: ObjectId,
    },
    Transform {
        id: ObjectId,
        transform: ObjectTransform,
    },
    Material {
        id: ObjectId,
        material: MaterialParams,
    },
    Keyframe {
        id: ObjectId,
        frame: i32,
        transform: ObjectTransform,
    },
    Light {
        name: String,
        location: Vector3<f32>,
        energy: f32,
    },
    Camera {
        name: String,
        location: Vector3<f32>,
        rotation_euler: Vector3<f32>,
    },
}

/// A scene builder that collects all calls in a `Vec`.
#[derive(Debug, Default)]
pub struct RecordingScene {
    commands: Vec<SceneCommand>,
    next_id: usize,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Vec<SceneCommand> {
        self.commands
    }

    pub fn as_slice(&self) -> &[SceneCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of objects created so far.
    pub fn object_count(&self) -> usize {
        self.next_id
    }

    /// Names of created objects, in creation order.
    pub fn object_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            SceneCommand::Create { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }

    /// All commands addressed to `id`, in call order.
    pub fn commands_for(&self, id: ObjectId) -> impl Iterator<Item = &SceneCommand> + '_ {
        self.commands.iter().filter(move |c| match c {
            SceneCommand::Create { id: i, .. }
            | SceneCommand::Link { id: i }
            | SceneCommand::Transform { id: i, .. }
            | SceneCommand::Material { id: i, .. }
            | SceneCommand::Keyframe { id: i, .. } => *i == id,
            _ => false,
        })
    }
}

impl SceneBuilder for RecordingScene {
    type Handle = ObjectId;
    type Error = Infallible;

    fn reset(&mut self, collection: &str) -> Result<(), Infallible> {
        // A fresh collection holds nothing from earlier runs.
        self.commands.clear();
        self.next_id = 0;
        self.commands.push(SceneCommand::Reset {
            collection: collection.to_owned(),
        });
        Ok(())
    }

    fn set_frame_range(&mut self, start: i32, end: i32) -> Result<(), Infallible> {
        self.commands.push(SceneCommand::FrameRange { start, end });
        Ok(())
    }

    fn create_primitive(
        &mut self,
        primitive: Primitive,
        name: &str,
    ) -> Result<ObjectId, Infallible> {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.commands.push(SceneCommand::Create {
            id,
            primitive,
            name: name.to_owned(),
        });
        Ok(id)
    }

    fn link(&mut self, object: &ObjectId) -> Result<(), Infallible> {
        self.commands.push(SceneCommand::Link { id: *object });
        Ok(())
    }

    fn set_transform(
        &mut self,
        object: &ObjectId,
        transform: &ObjectTransform,
    ) -> Result<(), Infallible> {
        self.commands.push(SceneCommand::Transform {
            id: *object,
            transform: *transform,
        });
        Ok(())
    }

    fn assign_material(
        &mut self,
        object: &ObjectId,
        material: &MaterialParams,
    ) -> Result<(), Infallible> {
        self.commands.push(SceneCommand::Material {
            id: *object,
            material: material.clone(),
        });
        Ok(())
    }

    fn keyframe(
        &mut self,
        object: &ObjectId,
        frame: i32,
        transform: &ObjectTransform,
    ) -> Result<(), Infallible> {
        self.commands.push(SceneCommand::Keyframe {
            id: *object,
            frame,
            transform: *transform,
        });
        Ok(())
    }

    fn add_light(
        &mut self,
        name: &str,
        location: Vector3<f32>,
        energy: f32,
    ) -> Result<(), Infallible> {
        self.commands.push(SceneCommand::Light {
            name: name.to_owned(),
            location,
            energy,
        });
        Ok(())
    }

    fn add_camera(
        &mut self,
        name: &str,
        location: Vector3<f32>,
        rotation_euler: Vector3<f32>,
    ) -> Result<(), Infallible> {
        self.commands.push(SceneCommand::Camera {
            name: name.to_owned(),
            location,
            rotation_euler,
        });
        Ok(())
    }
}

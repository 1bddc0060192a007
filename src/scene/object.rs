use std::fmt;

use super::{Camera, Transform};

/// Handle to a [`GameObject`]; never reused within one scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub const DEFAULT_TAG: &str = "Default";

/// A named entity in a scene: a transform plus an optional camera.
#[derive(Debug, Clone)]
pub struct GameObject {
    id: ObjectId,
    pub name: String,
    pub tag: String,
    pub layer: u32,
    active: bool,
    pub transform: Transform,
    pub camera: Option<Camera>,
}

impl GameObject {
    pub(crate) fn new(id: ObjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tag: DEFAULT_TAG.to_string(),
            layer: 0,
            active: true,
            transform: Transform::new(),
            camera: None,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn compare_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }
}

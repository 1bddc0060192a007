pub mod camera;
pub mod object;
pub mod transform;
pub mod uniform;
#[cfg(test)]
mod tests;

pub use camera::{Camera, CameraSettings};
pub use object::{GameObject, ObjectId};
pub use transform::Transform;
pub use uniform::{CameraUniform, ModelUniform};

use std::time::Instant;

use crate::error::SceneError;
use crate::math::Matrix4x4;

/// Frame timing, advanced by [`Scene::update`] or [`Scene::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Time {
    /// Seconds since the previous frame.
    pub delta_time: f32,
    /// Seconds since the scene was created.
    pub time: f32,
    pub frame_count: u64,
}

/// Owns the objects of a scene and tracks which camera renders it.
#[derive(Debug)]
pub struct Scene {
    objects: Vec<GameObject>,
    next_id: u64,
    main_camera: Option<ObjectId>,
    time: Time,
    last_update: Instant,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_id: 0,
            main_camera: None,
            time: Time::default(),
            last_update: Instant::now(),
        }
    }

    pub fn spawn(&mut self, name: impl Into<String>) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;

        let object = GameObject::new(id, name);
        log::debug!("Spawned object {} '{}'", id, object.name);
        self.objects.push(object);
        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// Removes an object. Removing the main camera leaves the scene without one.
    pub fn despawn(&mut self, id: ObjectId) -> Option<GameObject> {
        let index = self.objects.iter().position(|o| o.id() == id)?;
        let object = self.objects.remove(index);
        if self.main_camera == Some(id) {
            self.main_camera = None;
        }
        log::debug!("Despawned object {} '{}'", id, object.name);
        Some(object)
    }

    /// Attaches `camera` to an object. The first camera attached becomes the main camera.
    pub fn attach_camera(&mut self, id: ObjectId, camera: Camera) -> Result<(), SceneError> {
        let object = self.get_mut(id).ok_or(SceneError::UnknownObject(id))?;
        object.camera = Some(camera);
        log::debug!("Attached camera to object {}", id);

        if self.main_camera.is_none() {
            self.main_camera = Some(id);
            log::debug!("Object {} is now the main camera", id);
        }
        Ok(())
    }

    pub fn set_main_camera(&mut self, id: ObjectId) -> Result<(), SceneError> {
        let object = self.get(id).ok_or(SceneError::UnknownObject(id))?;
        if object.camera.is_none() {
            return Err(SceneError::NoCamera(id));
        }
        self.main_camera = Some(id);
        log::debug!("Object {} is now the main camera", id);
        Ok(())
    }

    pub fn main_camera(&self) -> Option<&GameObject> {
        self.main_camera.and_then(|id| self.get(id))
    }

    /// `projection * view` of the main camera, if there is one.
    pub fn view_projection(&self) -> Option<Matrix4x4> {
        let object = self.main_camera()?;
        let camera = object.camera.as_ref()?;
        Some(camera.view_projection(&object.transform))
    }

    pub fn objects(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.iter()
    }

    pub fn objects_mut(&mut self) -> impl Iterator<Item = &mut GameObject> {
        self.objects.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// First object with the given name.
    pub fn find(&self, name: &str) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn find_with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a GameObject> + 'a {
        self.objects.iter().filter(move |o| o.compare_tag(tag))
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    /// Advances time by the wall-clock interval since the previous update.
    pub fn update(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_update).as_secs_f32();
        self.last_update = now;

        self.tick(dt);
    }

    /// Advances time by a fixed `dt` in seconds.
    pub fn tick(&mut self, dt: f32) {
        self.time.delta_time = dt;
        self.time.time += dt;
        self.time.frame_count += 1;
    }
}

//! Plain-old-data uniform blocks, laid out for direct upload to a GPU buffer.

use super::{Camera, Scene, Transform};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
}

impl CameraUniform {
    pub fn new(camera: &Camera, transform: &Transform) -> Self {
        Self {
            view_proj: camera.view_projection(transform).to_cols_array_2d(),
            camera_pos: transform.position().extend(1.0).to_array(),
        }
    }

    /// Uniform for the scene's main camera, if it has one.
    pub fn from_scene(scene: &Scene) -> Option<Self> {
        let object = scene.main_camera()?;
        let camera = object.camera.as_ref()?;
        Some(Self::new(camera, &object.transform))
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model_matrix: [[f32; 4]; 4],
}

impl ModelUniform {
    pub fn new(transform: &Transform) -> Self {
        Self {
            model_matrix: transform.world_matrix().to_cols_array_2d(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<&Transform> for ModelUniform {
    fn from(transform: &Transform) -> Self {
        Self::new(transform)
    }
}

use anyhow::Result;

use crate::error::SceneError;
use crate::math::Vector3;
use crate::scene::{Camera, CameraSettings, GameObject, ObjectId, Scene};

pub const DEFAULT_EYE: Vector3 = Vector3::new(0.0, 8.0, -16.0);

/// A camera looking from `eye` at `target` over a floor with four markers
/// placed around the origin, each turned a further quarter.
pub fn create_demo_scene(
    settings: CameraSettings,
    eye: Vector3,
    target: Vector3,
) -> Result<Scene> {
    let mut scene = Scene::new();

    let camera_id = scene.spawn("Main Camera");
    let camera = object_mut(&mut scene, camera_id)?;
    camera.tag = "MainCamera".to_string();
    camera.transform.set_position(eye);
    camera.transform.look_at(target);
    scene.attach_camera(camera_id, Camera::new(settings)?)?;

    // 20x20 floor at the origin.
    let floor = scene.spawn("Floor");
    object_mut(&mut scene, floor)?
        .transform
        .set_scale(Vector3::new(20.0, 1.0, 20.0));

    let positions = [
        Vector3::new(-3.0, 0.5, -3.0),
        Vector3::new(3.0, 0.5, -3.0),
        Vector3::new(-3.0, 0.5, 3.0),
        Vector3::new(3.0, 0.5, 3.0),
    ];
    for (i, position) in positions.into_iter().enumerate() {
        let id = scene.spawn(format!("Marker {}", i));
        let marker = object_mut(&mut scene, id)?;
        marker.transform.set_position(position);
        marker.transform.set_euler_angles(Vector3::new(0.0, 90.0 * i as f32, 0.0));
    }

    log::debug!("Demo scene ready with {} objects", scene.len());
    Ok(scene)
}

fn object_mut(scene: &mut Scene, id: ObjectId) -> Result<&mut GameObject, SceneError> {
    scene.get_mut(id).ok_or(SceneError::UnknownObject(id))
}

use super::*;
use crate::error::SceneError;
use crate::math::{Quaternion, Vector3};
use approx::assert_abs_diff_eq;

fn camera() -> Camera {
    Camera::new(CameraSettings::default()).unwrap()
}

#[test]
fn test_scene_new() {
    let scene = Scene::new();
    assert!(scene.is_empty());
    assert!(scene.main_camera().is_none());
    assert!(scene.view_projection().is_none());
    assert_eq!(*scene.time(), Time::default());
}

#[test]
fn test_scene_debug_lists_objects() {
    let mut scene = Scene::new();
    scene.spawn("Lantern");
    let printed = format!("{:?}", scene);
    assert!(printed.contains("Lantern"));
    assert!(printed.contains("main_camera: None"));
}

#[test_log::test]
fn test_spawn_defaults() {
    let mut scene = Scene::new();
    let id = scene.spawn("Player");
    let object = scene.get(id).unwrap();

    assert_eq!(object.id(), id);
    assert_eq!(object.name, "Player");
    assert_eq!(object.tag, "Default");
    assert_eq!(object.layer, 0);
    assert!(object.is_active());
    assert_eq!(object.transform, Transform::new());
    assert!(object.camera.is_none());
}

#[test]
fn test_ids_are_unique_after_despawn() {
    let mut scene = Scene::new();
    let a = scene.spawn("a");
    let b = scene.spawn("b");
    assert_ne!(a, b);

    assert_eq!(scene.despawn(a).map(|o| o.name), Some("a".to_string()));
    assert!(scene.get(a).is_none());
    assert!(scene.despawn(a).is_none());

    let c = scene.spawn("c");
    assert_ne!(c, a);
    assert_ne!(c, b);
    assert_eq!(scene.len(), 2);
}

#[test]
fn test_get_mut_edits_transform() {
    let mut scene = Scene::new();
    let id = scene.spawn("cube");

    let object = scene.get_mut(id).unwrap();
    object.transform.set_position(Vector3::new(1.0, 2.0, 3.0));
    object.set_active(false);

    let object = scene.get(id).unwrap();
    assert_eq!(object.transform.world_matrix().position(), Vector3::new(1.0, 2.0, 3.0));
    assert!(!object.is_active());
}

#[test]
fn test_find_by_name_and_tag() {
    let mut scene = Scene::new();
    let first = scene.spawn("enemy");
    let second = scene.spawn("enemy");
    scene.spawn("player");
    scene.get_mut(second).unwrap().tag = "Boss".to_string();

    assert_eq!(scene.find("enemy").map(|o| o.id()), Some(first));
    assert!(scene.find("missing").is_none());

    let bosses: Vec<_> = scene.find_with_tag("Boss").map(|o| o.id()).collect();
    assert_eq!(bosses, vec![second]);
    assert_eq!(scene.find_with_tag("Default").count(), 2);
}

#[test_log::test]
fn test_first_camera_becomes_main() {
    let mut scene = Scene::new();
    let a = scene.spawn("Main Camera");
    let b = scene.spawn("Second Camera");

    scene.attach_camera(a, camera()).unwrap();
    scene.attach_camera(b, camera()).unwrap();
    assert_eq!(scene.main_camera().map(|o| o.id()), Some(a));

    scene.set_main_camera(b).unwrap();
    assert_eq!(scene.main_camera().map(|o| o.id()), Some(b));

    scene.despawn(b);
    assert!(scene.main_camera().is_none());
}

#[test]
fn test_camera_errors() {
    let mut scene = Scene::new();
    let plain = scene.spawn("plain");
    let ghost = scene.spawn("ghost");
    scene.despawn(ghost);

    assert_eq!(scene.attach_camera(ghost, camera()), Err(SceneError::UnknownObject(ghost)));
    assert_eq!(scene.set_main_camera(ghost), Err(SceneError::UnknownObject(ghost)));
    assert_eq!(scene.set_main_camera(plain), Err(SceneError::NoCamera(plain)));
    assert!(scene.main_camera().is_none());
}

#[test]
fn test_scene_view_projection_uses_main_camera() {
    let mut scene = Scene::new();
    let id = scene.spawn("Main Camera");
    scene.attach_camera(id, camera()).unwrap();

    let object = scene.get_mut(id).unwrap();
    object.transform.set_position(Vector3::new(0.0, 8.0, -16.0));
    object.transform.look_at(Vector3::ZERO);

    let object = scene.get(id).unwrap();
    let expected = object.camera.as_ref().unwrap().view_projection(&object.transform);
    assert_eq!(scene.view_projection(), Some(expected));

    // The origin is straight ahead of the camera.
    let clip = expected.multiply_point(Vector3::ZERO);
    assert_abs_diff_eq!(clip.x, 0.0, epsilon = 1e-4);
    assert_abs_diff_eq!(clip.y, 0.0, epsilon = 1e-4);
}

#[test]
fn test_tick_advances_time() {
    let mut scene = Scene::new();
    scene.tick(0.5);
    scene.tick(0.25);

    let time = scene.time();
    assert_eq!(time.delta_time, 0.25);
    assert_eq!(time.time, 0.75);
    assert_eq!(time.frame_count, 2);
}

#[test]
fn test_update_uses_monotonic_clock() {
    let mut scene = Scene::new();
    std::thread::sleep(std::time::Duration::from_millis(5));
    scene.update();
    scene.update();

    let time = scene.time();
    assert_eq!(time.frame_count, 2);
    assert!(time.delta_time >= 0.0);
    assert!(time.time >= 0.005);
}

#[test]
fn test_uniforms() {
    let mut scene = Scene::new();
    assert!(CameraUniform::from_scene(&scene).is_none());

    let id = scene.spawn("Main Camera");
    scene.attach_camera(id, camera()).unwrap();
    scene
        .get_mut(id)
        .unwrap()
        .transform
        .set_position(Vector3::new(1.0, 2.0, 3.0));

    let uniform = CameraUniform::from_scene(&scene).unwrap();
    assert_eq!(uniform.camera_pos, [1.0, 2.0, 3.0, 1.0]);
    assert_eq!(uniform.view_proj, scene.view_projection().unwrap().to_cols_array_2d());
    assert_eq!(uniform.as_bytes().len(), 80);

    let transform = Transform::from_trs(
        Vector3::new(4.0, 5.0, 6.0),
        Quaternion::IDENTITY,
        Vector3::ONE,
    );
    let model = ModelUniform::from(&transform);
    assert_eq!(model.model_matrix[3], [4.0, 5.0, 6.0, 1.0]);
    assert_eq!(model.as_bytes().len(), 64);
}

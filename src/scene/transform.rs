use crate::math::scalar::EPSILON;
use crate::math::{Matrix4x4, Quaternion, Vector3};

/// Position, rotation and scale of a scene object, with its world matrix.
///
/// The world matrix is rebuilt by every setter, so reading it never does work
/// and never observes a stale value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    position: Vector3,
    rotation: Quaternion,
    scale: Vector3,
    world_matrix: Matrix4x4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    pub fn new() -> Self {
        Self {
            position: Vector3::ZERO,
            rotation: Quaternion::IDENTITY,
            scale: Vector3::ONE,
            world_matrix: Matrix4x4::IDENTITY,
        }
    }

    pub fn from_trs(position: Vector3, rotation: Quaternion, scale: Vector3) -> Self {
        let mut transform = Self {
            position,
            rotation,
            scale,
            world_matrix: Matrix4x4::IDENTITY,
        };
        transform.update_world_matrix();
        transform
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn rotation(&self) -> Quaternion {
        self.rotation
    }

    pub fn scale(&self) -> Vector3 {
        self.scale
    }

    pub fn world_matrix(&self) -> &Matrix4x4 {
        &self.world_matrix
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
        self.update_world_matrix();
    }

    pub fn set_rotation(&mut self, rotation: Quaternion) {
        self.rotation = rotation;
        self.update_world_matrix();
    }

    pub fn set_scale(&mut self, scale: Vector3) {
        self.scale = scale;
        self.update_world_matrix();
    }

    /// Rotation as Euler angles in degrees, see [`Quaternion::to_euler`].
    pub fn euler_angles(&self) -> Vector3 {
        self.rotation.to_euler()
    }

    pub fn set_euler_angles(&mut self, degrees: Vector3) {
        self.set_rotation(Quaternion::euler(degrees));
    }

    pub fn right(&self) -> Vector3 {
        self.rotation * Vector3::RIGHT
    }

    pub fn up(&self) -> Vector3 {
        self.rotation * Vector3::UP
    }

    pub fn forward(&self) -> Vector3 {
        self.rotation * Vector3::FORWARD
    }

    pub fn set_right(&mut self, direction: Vector3) {
        self.set_rotation(Quaternion::from_to_rotation(Vector3::RIGHT, direction));
    }

    pub fn set_up(&mut self, direction: Vector3) {
        self.set_rotation(Quaternion::from_to_rotation(Vector3::UP, direction));
    }

    pub fn set_forward(&mut self, direction: Vector3) {
        self.set_rotation(Quaternion::from_to_rotation(Vector3::FORWARD, direction));
    }

    pub fn translate(&mut self, delta: Vector3) {
        self.set_position(self.position + delta);
    }

    /// Applies `degrees` in local space, after the current rotation.
    pub fn rotate(&mut self, degrees: Vector3) {
        self.set_rotation(self.rotation * Quaternion::euler(degrees));
    }

    /// Turns the transform so `forward()` points at `target`, keeping world up where possible.
    pub fn look_at(&mut self, target: Vector3) {
        let direction = target - self.position;
        if direction.sqr_magnitude() <= EPSILON * EPSILON {
            return;
        }

        let forward = direction.normalized();
        if Vector3::UP.cross(forward).sqr_magnitude() <= EPSILON {
            // Looking straight up or down: no roll reference.
            self.set_forward(forward);
            return;
        }

        // The view matrix holds the basis in its rows; the rotation holds it in columns.
        let view = Matrix4x4::look_at(self.position, target, Vector3::UP);
        let rotation = Quaternion::from_rotation_matrix(&view.transposed());
        self.set_rotation(rotation.normalized());
    }

    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        self.world_matrix.multiply_point3x4(point)
    }

    pub fn transform_direction(&self, direction: Vector3) -> Vector3 {
        self.world_matrix.multiply_vector(direction)
    }

    fn update_world_matrix(&mut self) {
        self.world_matrix = Matrix4x4::trs(self.position, self.rotation, self.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn expected_world(t: &Transform) -> Matrix4x4 {
        Matrix4x4::translate(t.position())
            * Matrix4x4::rotate(t.rotation())
            * Matrix4x4::scale(t.scale())
    }

    #[test]
    fn test_transform_new() {
        let transform = Transform::new();
        assert_eq!(transform.position(), Vector3::ZERO);
        assert_eq!(transform.rotation(), Quaternion::IDENTITY);
        assert_eq!(transform.scale(), Vector3::ONE);
        assert_eq!(*transform.world_matrix(), Matrix4x4::IDENTITY);
        assert_eq!(Transform::default(), transform);
    }

    #[test]
    fn test_world_matrix_tracks_every_setter() {
        let mut transform = Transform::new();

        transform.set_position(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(*transform.world_matrix(), expected_world(&transform));
        assert_eq!(transform.world_matrix().position(), Vector3::new(1.0, 2.0, 3.0));

        transform.set_rotation(Quaternion::euler_xyz(10.0, 45.0, -30.0));
        assert_eq!(*transform.world_matrix(), expected_world(&transform));

        transform.set_scale(Vector3::new(2.0, 0.5, 3.0));
        assert_eq!(*transform.world_matrix(), expected_world(&transform));

        transform.set_euler_angles(Vector3::new(0.0, 90.0, 0.0));
        assert_eq!(*transform.world_matrix(), expected_world(&transform));

        transform.translate(Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(transform.position(), Vector3::new(0.0, 2.0, 3.0));
        assert_eq!(*transform.world_matrix(), expected_world(&transform));

        transform.rotate(Vector3::new(0.0, 0.0, 15.0));
        assert_eq!(*transform.world_matrix(), expected_world(&transform));
    }

    #[test]
    fn test_scale_lands_on_diagonal() {
        let mut transform = Transform::new();
        transform.set_scale(Vector3::new(2.0, 2.0, 2.0));
        let m = transform.world_matrix();
        assert_eq!(m[(0, 0)], 2.0);
        assert_eq!(m[(1, 1)], 2.0);
        assert_eq!(m[(2, 2)], 2.0);
    }

    #[test]
    fn test_direction_vectors() {
        let mut transform = Transform::new();
        assert_eq!(transform.forward(), Vector3::FORWARD);
        assert_eq!(transform.right(), Vector3::RIGHT);
        assert_eq!(transform.up(), Vector3::UP);

        transform.set_euler_angles(Vector3::new(0.0, 90.0, 0.0));
        assert_abs_diff_eq!(transform.forward(), Vector3::RIGHT, epsilon = 1e-6);
        assert_abs_diff_eq!(transform.right(), Vector3::BACK, epsilon = 1e-6);
        assert_abs_diff_eq!(transform.up(), Vector3::UP, epsilon = 1e-6);
    }

    #[test]
    fn test_direction_setters() {
        let mut transform = Transform::new();

        transform.set_forward(Vector3::new(1.0, 0.0, 1.0));
        assert_abs_diff_eq!(
            transform.forward(),
            Vector3::new(1.0, 0.0, 1.0).normalized(),
            epsilon = 1e-6
        );

        transform.set_up(Vector3::RIGHT);
        assert_abs_diff_eq!(transform.up(), Vector3::RIGHT, epsilon = 1e-6);

        transform.set_right(Vector3::FORWARD * 4.0);
        assert_abs_diff_eq!(transform.right(), Vector3::FORWARD, epsilon = 1e-6);
        assert_eq!(*transform.world_matrix(), expected_world(&transform));
    }

    #[test]
    fn test_direction_setters_accept_short_vectors() {
        let mut transform = Transform::new();

        transform.set_forward(Vector3::new(1e-4, 0.0, 0.0));
        assert_abs_diff_eq!(transform.forward(), Vector3::RIGHT, epsilon = 1e-6);

        transform.set_up(Vector3::DOWN * 1e-4);
        assert_abs_diff_eq!(transform.up(), Vector3::DOWN, epsilon = 1e-6);
        assert_relative_eq!(transform.rotation().magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_accumulates_in_local_space() {
        let mut transform = Transform::new();
        transform.rotate(Vector3::new(0.0, 45.0, 0.0));
        transform.rotate(Vector3::new(0.0, 45.0, 0.0));
        assert_abs_diff_eq!(transform.forward(), Vector3::RIGHT, epsilon = 1e-6);
        assert_abs_diff_eq!(transform.euler_angles(), Vector3::new(0.0, 90.0, 0.0), epsilon = 1e-3);
    }

    #[test]
    fn test_look_at() {
        let mut transform = Transform::new();
        transform.set_position(Vector3::new(0.0, 0.0, -10.0));
        transform.look_at(Vector3::new(10.0, 0.0, 0.0));

        let expected = Vector3::new(1.0, 0.0, 1.0).normalized();
        assert_abs_diff_eq!(transform.forward(), expected, epsilon = 1e-5);
        assert_abs_diff_eq!(transform.up(), Vector3::UP, epsilon = 1e-5);
        assert_relative_eq!(transform.rotation().magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_look_at_straight_down_and_at_self() {
        let mut transform = Transform::new();
        transform.set_position(Vector3::new(0.0, 5.0, 0.0));
        transform.look_at(Vector3::ZERO);
        assert_abs_diff_eq!(transform.forward(), Vector3::DOWN, epsilon = 1e-6);

        let before = transform;
        transform.look_at(transform.position());
        assert_eq!(transform, before);
    }

    #[test]
    fn test_transform_point_and_direction() {
        let transform = Transform::from_trs(
            Vector3::new(1.0, 2.0, 3.0),
            Quaternion::angle_axis(90.0, Vector3::UP),
            Vector3::splat(2.0),
        );

        assert_abs_diff_eq!(
            transform.transform_point(Vector3::FORWARD),
            Vector3::new(3.0, 2.0, 3.0),
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(
            transform.transform_direction(Vector3::FORWARD),
            Vector3::new(2.0, 0.0, 0.0),
            epsilon = 1e-5
        );
    }
}

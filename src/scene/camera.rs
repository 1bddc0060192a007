use crate::error::MathError;
use crate::math::{Matrix4x4, Vector3};

use super::Transform;

/// Projection parameters for a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    pub near: f32,
    pub far: f32,
    /// Width over height.
    pub aspect: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            field_of_view: 60.0,
            near: 0.1,
            far: 1000.0,
            aspect: 1.0,
        }
    }
}

/// A perspective camera. It has no position of its own: the view is derived
/// from the [`Transform`] of the object it is attached to on every call.
///
/// The projection is built once in [`Camera::new`]; to change any of its
/// parameters, construct a new camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    settings: CameraSettings,
    projection_matrix: Matrix4x4,
}

impl Camera {
    pub fn new(settings: CameraSettings) -> Result<Self, MathError> {
        let projection_matrix = Matrix4x4::perspective(
            settings.field_of_view,
            settings.aspect,
            settings.near,
            settings.far,
        )
        .map_err(|e| {
            log::warn!("Rejected camera settings {:?}: {}", settings, e);
            e
        })?;

        log::debug!(
            "Camera created: fov {} aspect {} near {} far {}",
            settings.field_of_view,
            settings.aspect,
            settings.near,
            settings.far
        );

        Ok(Self {
            settings,
            projection_matrix,
        })
    }

    /// A camera with the same settings but a different aspect ratio, e.g. after a resize.
    pub fn with_aspect(&self, aspect: f32) -> Result<Self, MathError> {
        Self::new(CameraSettings {
            aspect,
            ..self.settings
        })
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn field_of_view(&self) -> f32 {
        self.settings.field_of_view
    }

    pub fn near(&self) -> f32 {
        self.settings.near
    }

    pub fn far(&self) -> f32 {
        self.settings.far
    }

    pub fn aspect(&self) -> f32 {
        self.settings.aspect
    }

    pub fn projection_matrix(&self) -> &Matrix4x4 {
        &self.projection_matrix
    }

    pub fn view_matrix(&self, transform: &Transform) -> Matrix4x4 {
        let eye = transform.position();
        Matrix4x4::look_at(eye, eye + transform.forward(), transform.up())
    }

    pub fn view_projection(&self, transform: &Transform) -> Matrix4x4 {
        self.projection_matrix * self.view_matrix(transform)
    }

    /// Projects a world-space point to normalized device coordinates.
    pub fn world_to_clip(&self, transform: &Transform, point: Vector3) -> Vector3 {
        self.view_projection(transform).multiply_point(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Quaternion;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn default_camera() -> Camera {
        Camera::new(CameraSettings::default()).unwrap()
    }

    #[test]
    fn test_camera_initialization() {
        let camera = default_camera();
        assert_eq!(camera.field_of_view(), 60.0);
        assert_eq!(camera.near(), 0.1);
        assert_eq!(camera.far(), 1000.0);
        assert_eq!(camera.aspect(), 1.0);
        assert_eq!(
            *camera.projection_matrix(),
            Matrix4x4::perspective(60.0, 1.0, 0.1, 1000.0).unwrap()
        );
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let bad_fov = CameraSettings {
            field_of_view: 0.0,
            ..Default::default()
        };
        assert_eq!(Camera::new(bad_fov), Err(MathError::InvalidFieldOfView(0.0)));

        let bad_aspect = CameraSettings {
            aspect: 0.0,
            ..Default::default()
        };
        assert_eq!(Camera::new(bad_aspect), Err(MathError::InvalidAspectRatio(0.0)));

        let bad_near = CameraSettings {
            near: -1.0,
            ..Default::default()
        };
        assert_eq!(Camera::new(bad_near), Err(MathError::InvalidNearPlane(-1.0)));

        let bad_far = CameraSettings {
            near: 5.0,
            far: 5.0,
            ..Default::default()
        };
        assert_eq!(
            Camera::new(bad_far),
            Err(MathError::InvalidFarPlane { near: 5.0, far: 5.0 })
        );
    }

    #[test]
    fn test_view_direction() {
        let camera = default_camera();
        let mut transform = Transform::new();

        // Identity transform looks down +Z, so the view is identity.
        assert_abs_diff_eq!(camera.view_matrix(&transform), Matrix4x4::IDENTITY, epsilon = 1e-6);

        // Turn right: a point on +X is now straight ahead.
        transform.set_euler_angles(Vector3::new(0.0, 90.0, 0.0));
        let view = camera.view_matrix(&transform);
        assert_abs_diff_eq!(
            view.multiply_point3x4(Vector3::new(5.0, 0.0, 0.0)),
            Vector3::new(0.0, 0.0, 5.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_view_matrix_follows_transform() {
        let camera = default_camera();
        let mut transform = Transform::new();
        transform.set_position(Vector3::new(0.0, 0.0, -5.0));
        let initial = camera.view_matrix(&transform);

        // Move camera and verify matrix changes
        transform.set_position(Vector3::new(1.0, 1.0, -5.0));
        let moved = camera.view_matrix(&transform);
        assert_ne!(initial, moved);
        assert_abs_diff_eq!(
            moved.multiply_point3x4(transform.position()),
            Vector3::ZERO,
            epsilon = 1e-6
        );

        // Rotate camera and verify matrix changes
        transform.set_rotation(Quaternion::angle_axis(30.0, Vector3::UP));
        let rotated = camera.view_matrix(&transform);
        assert_ne!(moved, rotated);
    }

    #[test]
    fn test_projection_is_fixed_after_construction() {
        let camera = default_camera();
        let before = *camera.projection_matrix();

        let mut transform = Transform::new();
        transform.set_position(Vector3::new(3.0, -2.0, 7.0));
        let _ = camera.view_projection(&transform);
        assert_eq!(*camera.projection_matrix(), before);

        let wide = camera.with_aspect(2.0).unwrap();
        assert_eq!(wide.aspect(), 2.0);
        assert_eq!(wide.field_of_view(), camera.field_of_view());
        assert_eq!(*camera.projection_matrix(), before);
        assert_relative_eq!(
            wide.projection_matrix()[(0, 0)],
            before[(0, 0)] / 2.0,
            epsilon = 1e-6
        );
        assert!(camera.with_aspect(-1.0).is_err());
    }

    #[test]
    fn test_world_to_clip() {
        let camera = default_camera();
        let mut transform = Transform::new();
        transform.set_position(Vector3::new(0.0, 0.0, -10.0));

        // Straight ahead lands in the center of the screen.
        let center = camera.world_to_clip(&transform, Vector3::ZERO);
        assert_abs_diff_eq!(center.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(center.y, 0.0, epsilon = 1e-6);
        assert!(center.z > 0.0 && center.z < 1.0);

        // The near and far planes map to depth 0 and 1.
        let near = camera.world_to_clip(&transform, Vector3::new(0.0, 0.0, -9.9));
        assert_abs_diff_eq!(near.z, 0.0, epsilon = 1e-4);
        let far = camera.world_to_clip(&transform, Vector3::new(0.0, 0.0, 990.0));
        assert_abs_diff_eq!(far.z, 1.0, epsilon = 1e-4);

        // A point to the right projects to positive x.
        let right = camera.world_to_clip(&transform, Vector3::new(2.0, 0.0, 0.0));
        assert!(right.x > 0.0);
    }
}

//! Conversions to and from glam, for handing data to glam-based renderers.
//! Both libraries store matrices column-major, so `Mat4` converts by array copy.

use glam::{IVec2, Mat4, Quat, Vec2, Vec3, Vec4};

use super::{Matrix4x4, Quaternion, Vector2, Vector2Int, Vector3, Vector4};

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<IVec2> for Vector2Int {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2Int> for IVec2 {
    fn from(v: Vector2Int) -> Self {
        IVec2::new(v.x, v.y)
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec4> for Vector4 {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4> for Vec4 {
    fn from(v: Vector4) -> Self {
        Vec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Quat> for Quaternion {
    fn from(q: Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quaternion> for Quat {
    fn from(q: Quaternion) -> Self {
        Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<Mat4> for Matrix4x4 {
    fn from(m: Mat4) -> Self {
        Self::from_cols_array(m.to_cols_array())
    }
}

impl From<Matrix4x4> for Mat4 {
    fn from(m: Matrix4x4) -> Self {
        Mat4::from_cols_array(&m.to_cols_array())
    }
}

use std::ops::{Add, Div, Mul, MulAssign, Sub};

use super::scalar::{DEG2RAD, EPSILON, RAD2DEG};
use super::{Matrix4x4, Vector3, Vector4};
use crate::error::MathError;

/// Cosine above which slerp degrades to linear weights, avoiding a division by `sin(omega) ≈ 0`.
const SLERP_EPSILON: f32 = 1e-6;

/// A rotation stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// Constructors return unit quaternions. The arithmetic operators (`+`, `-`,
/// scaling) do not, so re-normalize after blending by hand.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_components!(Quaternion, 4, x => 0, y => 1, z => 2, w => 3);
impl_approx!(Quaternion, x, y, z, w);

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    #[inline]
    pub fn sqr_magnitude(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    /// Unit-length copy. A (near) zero quaternion carries no rotation and maps to `IDENTITY`.
    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude < EPSILON {
            return Self::IDENTITY;
        }
        self / magnitude
    }

    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    pub fn inverse(self) -> Result<Self, MathError> {
        let sqr_magnitude = self.sqr_magnitude();
        if sqr_magnitude <= 0.0 {
            return Err(MathError::ZeroQuaternion);
        }
        Ok(self.conjugate() / sqr_magnitude)
    }

    /// Normalized linear blend along the shorter arc.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let other = if self.dot(other) >= 0.0 { other } else { other * -1.0 };
        (self * (1.0 - t) + other * t).normalized()
    }

    /// Spherical interpolation along the shortest arc between `self` and `other`.
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let mut cos_omega = self.dot(other);
        let flip = cos_omega < 0.0;
        if flip {
            cos_omega = -cos_omega;
        }

        let (s1, s2) = if cos_omega > 1.0 - SLERP_EPSILON {
            (1.0 - t, t)
        } else {
            let omega = cos_omega.acos();
            let inv_sin_omega = 1.0 / omega.sin();
            (
                ((1.0 - t) * omega).sin() * inv_sin_omega,
                (t * omega).sin() * inv_sin_omega,
            )
        };
        let s2 = if flip { -s2 } else { s2 };

        Self::new(
            s1 * self.x + s2 * other.x,
            s1 * self.y + s2 * other.y,
            s1 * self.z + s2 * other.z,
            s1 * self.w + s2 * other.w,
        )
    }

    /// Composes `Ry(yaw) * Rx(pitch) * Rz(roll)`; all angles in radians.
    pub fn from_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sy, cy) = (yaw * 0.5).sin_cos();

        Self::new(
            cy * sp * cr + sy * cp * sr,
            sy * cp * cr - cy * sp * sr,
            cy * cp * sr - sy * sp * cr,
            cy * cp * cr + sy * sp * sr,
        )
    }

    /// Rotation from Euler angles in degrees: `x` pitches about X, `y` yaws about Y,
    /// `z` rolls about Z. Roll is applied first, then pitch, then yaw.
    pub fn euler(angles: Vector3) -> Self {
        Self::from_yaw_pitch_roll(angles.y * DEG2RAD, angles.x * DEG2RAD, angles.z * DEG2RAD)
    }

    pub fn euler_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::euler(Vector3::new(x, y, z))
    }

    /// Inverse of [`Quaternion::euler`], in degrees.
    ///
    /// At pitch ±90° yaw and roll rotate about the same axis and cannot be told
    /// apart; the result then reports roll 0 and folds everything into yaw, so
    /// `euler(e).to_euler()` only reproduces `e` away from that lock.
    pub fn to_euler(self) -> Vector3 {
        let Self { x, y, z, w } = self;

        let sin_pitch = 2.0 * (w * x - y * z);
        if sin_pitch.abs() >= 1.0 - 1e-6 {
            let pitch = 90.0f32.copysign(sin_pitch);
            let yaw = (-2.0 * (x * z - w * y)).atan2(1.0 - 2.0 * (y * y + z * z));
            return Vector3::new(pitch, yaw * RAD2DEG, 0.0);
        }

        let pitch = sin_pitch.asin();
        let yaw = (2.0 * (x * z + w * y)).atan2(1.0 - 2.0 * (x * x + y * y));
        let roll = (2.0 * (x * y + w * z)).atan2(1.0 - 2.0 * (x * x + z * z));
        Vector3::new(pitch * RAD2DEG, yaw * RAD2DEG, roll * RAD2DEG)
    }

    /// Rotation of `degrees` about `axis`. The axis is normalized first.
    pub fn angle_axis(degrees: f32, axis: Vector3) -> Self {
        Self::from_axis_angle_radians(axis, degrees * DEG2RAD)
    }

    pub fn from_axis_angle_radians(axis: Vector3, radians: f32) -> Self {
        let axis = axis.normalized();
        let (sin, cos) = (radians * 0.5).sin_cos();
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Shortest rotation carrying the direction `from` onto `to`. Only the
    /// directions matter; a zero-length input yields `IDENTITY`.
    pub fn from_to_rotation(from: Vector3, to: Vector3) -> Self {
        let from = from.normalized();
        let to = to.normalized();
        if from == Vector3::ZERO || to == Vector3::ZERO {
            return Self::IDENTITY;
        }

        let axis = from.cross(to);
        if axis.sqr_magnitude() > EPSILON * EPSILON {
            return Self::angle_axis(from.angle(to), axis);
        }
        if from.dot(to) > 0.0 {
            return Self::IDENTITY;
        }

        // Opposite directions: any axis orthogonal to `from` works.
        let mut orthogonal = Vector3::RIGHT.cross(from);
        if orthogonal.sqr_magnitude() <= EPSILON {
            orthogonal = Vector3::UP.cross(from);
        }
        Self::angle_axis(180.0, orthogonal)
    }

    /// The 3x3 rotation block of a column-vector transform; the rest is identity.
    pub fn to_rotation_matrix(self) -> Matrix4x4 {
        let Self { x, y, z, w } = self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        let mut m = Matrix4x4::IDENTITY;
        m[(0, 0)] = 1.0 - 2.0 * (yy + zz);
        m[(0, 1)] = 2.0 * (xy - wz);
        m[(0, 2)] = 2.0 * (xz + wy);
        m[(1, 0)] = 2.0 * (xy + wz);
        m[(1, 1)] = 1.0 - 2.0 * (xx + zz);
        m[(1, 2)] = 2.0 * (yz - wx);
        m[(2, 0)] = 2.0 * (xz - wy);
        m[(2, 1)] = 2.0 * (yz + wx);
        m[(2, 2)] = 1.0 - 2.0 * (xx + yy);
        m
    }

    /// Extracts the rotation from the upper 3x3 block of `m`, which must be orthonormal.
    pub fn from_rotation_matrix(m: &Matrix4x4) -> Self {
        let (m00, m01, m02) = (m[(0, 0)], m[(0, 1)], m[(0, 2)]);
        let (m10, m11, m12) = (m[(1, 0)], m[(1, 1)], m[(1, 2)]);
        let (m20, m21, m22) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);
        let trace = m00 + m11 + m22;

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s)
        } else if m00 >= m11 && m00 >= m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        }
    }
}

impl From<Vector4> for Quaternion {
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Quaternion> for Vector4 {
    fn from(q: Quaternion) -> Self {
        Vector4::new(q.x, q.y, q.z, q.w)
    }
}

impl Add for Quaternion {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Quaternion {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Div<f32> for Quaternion {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

/// Hamilton product: `a * b` applies `b` first, then `a`.
impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y + a.y * b.w + a.z * b.x - a.x * b.z,
            a.w * b.z + a.z * b.w + a.x * b.y - a.y * b.x,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vector3> for Quaternion {
    type Output = Vector3;

    /// `v + 2w(u × v) + 2u × (u × v)` with `u` the vector part.
    fn mul(self, v: Vector3) -> Vector3 {
        let u = Vector3::new(self.x, self.y, self.z);
        let uv = u.cross(v);
        let uuv = u.cross(uv);
        v + uv * (2.0 * self.w) + uuv * 2.0
    }
}

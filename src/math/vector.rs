use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ParseVectorError;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Integer 2D vector for pixel and grid coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector2Int {
    pub x: i32,
    pub y: i32,
}

impl_vector!(Vector2, x, y);
impl_vector!(Vector3, x, y, z);
impl_vector!(Vector4, x, y, z, w);

impl_components!(Vector2, 2, x => 0, y => 1);
impl_components!(Vector3, 3, x => 0, y => 1, z => 2);
impl_components!(Vector4, 4, x => 0, y => 1, z => 2, w => 3);

impl_components!(Vector2Int: i32, 2, x => 0, y => 1);

impl_approx!(Vector2, x, y);
impl_approx!(Vector3, x, y, z);
impl_approx!(Vector4, x, y, z, w);

impl Vector2 {
    pub const UP: Self = Self::new(0.0, 1.0);
    pub const DOWN: Self = Self::new(0.0, -1.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    /// Rotates 90 degrees counter-clockwise.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Angle in degrees, positive when `to` lies counter-clockwise of `self`.
    pub fn signed_angle(self, to: Self) -> f32 {
        let sign = (self.x * to.y - self.y * to.x).signum();
        self.angle(to) * sign
    }
}

impl Vector3 {
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Angle in degrees, signed by which side of `axis` the rotation from `self` to `to` falls on.
    pub fn signed_angle(self, to: Self, axis: Self) -> f32 {
        let sign = axis.dot(self.cross(to)).signum();
        self.angle(to) * sign
    }

    #[inline]
    pub fn extend(self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

impl Vector4 {
    #[inline]
    pub fn truncate(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl Vector2Int {
    pub const ZERO: Self = Self::new(0, 0);
    pub const ONE: Self = Self::new(1, 1);
    pub const UP: Self = Self::new(0, 1);
    pub const DOWN: Self = Self::new(0, -1);
    pub const LEFT: Self = Self::new(-1, 0);
    pub const RIGHT: Self = Self::new(1, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Drops the fractional part of each component, rounding toward zero.
    #[inline]
    pub fn from_truncated(v: Vector2) -> Self {
        Self::new(v.x as i32, v.y as i32)
    }

    /// Component-wise division, `None` when either divisor component is zero.
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        Some(Self::new(self.x.checked_div(rhs.x)?, self.y.checked_div(rhs.y)?))
    }
}

impl From<Vector2Int> for Vector2 {
    fn from(v: Vector2Int) -> Self {
        Self::new(v.x as f32, v.y as f32)
    }
}

impl Add for Vector2Int {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<i32> for Vector2Int {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        Self::new(self.x + rhs, self.y + rhs)
    }
}

impl Sub for Vector2Int {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<i32> for Vector2Int {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        Self::new(self.x - rhs, self.y - rhs)
    }
}

impl Mul for Vector2Int {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<i32> for Vector2Int {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Integer division; panics on a zero divisor like `i32` does. See [`Vector2Int::checked_div`].
impl Div for Vector2Int {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<i32> for Vector2Int {
    type Output = Self;
    fn div(self, rhs: i32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2Int {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2Int {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2Int {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl From<Vector2> for Vector3 {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y, 0.0)
    }
}

impl From<Vector3> for Vector2 {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector3> for Vector4 {
    fn from(v: Vector3) -> Self {
        v.extend(0.0)
    }
}

impl From<Vector4> for Vector3 {
    fn from(v: Vector4) -> Self {
        v.truncate()
    }
}

impl FromStr for Vector3 {
    type Err = ParseVectorError;

    /// Parses `x,y,z`, tolerating whitespace around each component. The
    /// parenthesized `Display` form is accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|inner| inner.strip_suffix(')'))
            .unwrap_or(s);
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseVectorError::ComponentCount {
                expected: 3,
                found: parts.len(),
            });
        }

        let mut components = [0.0f32; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| ParseVectorError::InvalidComponent(part.to_string()))?;
        }
        Ok(Self::from(components))
    }
}

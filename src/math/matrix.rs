use std::ops::{Index, IndexMut, Mul, MulAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::{Quaternion, Vector3, Vector4};
use crate::error::MathError;

/// A 4x4 matrix for column vectors (`p' = M * p`).
///
/// Storage is column-major: linear index `i` addresses row `i % 4` of column
/// `i / 4`, which is also the layout GPUs expect for uniform upload. Indexing
/// with `(row, col)` and with a linear index always agree.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix4x4 {
    data: [f32; 16],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4x4 {
    pub const ZERO: Self = Self { data: [0.0; 16] };

    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    #[inline]
    pub const fn from_cols_array(data: [f32; 16]) -> Self {
        Self { data }
    }

    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        self.data
    }

    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        [
            self.get_column(0).to_array(),
            self.get_column(1).to_array(),
            self.get_column(2).to_array(),
            self.get_column(3).to_array(),
        ]
    }

    pub fn from_cols(c0: Vector4, c1: Vector4, c2: Vector4, c3: Vector4) -> Self {
        let mut m = Self::ZERO;
        for (col, column) in [c0, c1, c2, c3].into_iter().enumerate() {
            m.set_column(col, column);
        }
        m
    }

    /// Builds a matrix from rows, reading the same way it is written in source.
    pub fn from_rows(r0: [f32; 4], r1: [f32; 4], r2: [f32; 4], r3: [f32; 4]) -> Self {
        let mut m = Self::ZERO;
        for (row, values) in [r0, r1, r2, r3].into_iter().enumerate() {
            m.set_row(row, Vector4::from(values));
        }
        m
    }

    pub fn get_column(&self, col: usize) -> Vector4 {
        Vector4::new(self[(0, col)], self[(1, col)], self[(2, col)], self[(3, col)])
    }

    pub fn get_row(&self, row: usize) -> Vector4 {
        Vector4::new(self[(row, 0)], self[(row, 1)], self[(row, 2)], self[(row, 3)])
    }

    pub fn set_column(&mut self, col: usize, column: Vector4) {
        for row in 0..4 {
            self[(row, col)] = column[row];
        }
    }

    pub fn set_row(&mut self, row: usize, values: Vector4) {
        for col in 0..4 {
            self[(row, col)] = values[col];
        }
    }

    /// The translation column.
    #[inline]
    pub fn position(&self) -> Vector3 {
        Vector3::new(self[(0, 3)], self[(1, 3)], self[(2, 3)])
    }

    pub fn transpose(&mut self) {
        for row in 0..4 {
            for col in (row + 1)..4 {
                let upper = self[(row, col)];
                self[(row, col)] = self[(col, row)];
                self[(col, row)] = upper;
            }
        }
    }

    pub fn transposed(mut self) -> Self {
        self.transpose();
        self
    }

    pub fn translate(v: Vector3) -> Self {
        let mut m = Self::IDENTITY;
        m[(0, 3)] = v.x;
        m[(1, 3)] = v.y;
        m[(2, 3)] = v.z;
        m
    }

    pub fn scale(v: Vector3) -> Self {
        let mut m = Self::IDENTITY;
        m[(0, 0)] = v.x;
        m[(1, 1)] = v.y;
        m[(2, 2)] = v.z;
        m
    }

    pub fn uniform_scale(s: f32) -> Self {
        Self::scale(Vector3::splat(s))
    }

    #[inline]
    pub fn rotate(q: Quaternion) -> Self {
        q.to_rotation_matrix()
    }

    /// `translate(t) * rotate(r) * scale(s)`: scales first, translates last.
    pub fn trs(translation: Vector3, rotation: Quaternion, scale: Vector3) -> Self {
        Self::translate(translation) * Self::rotate(rotation) * Self::scale(scale)
    }

    pub fn rotation_x(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut m = Self::IDENTITY;
        m[(1, 1)] = cos;
        m[(1, 2)] = -sin;
        m[(2, 1)] = sin;
        m[(2, 2)] = cos;
        m
    }

    pub fn rotation_y(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut m = Self::IDENTITY;
        m[(0, 0)] = cos;
        m[(0, 2)] = sin;
        m[(2, 0)] = -sin;
        m[(2, 2)] = cos;
        m
    }

    pub fn rotation_z(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut m = Self::IDENTITY;
        m[(0, 0)] = cos;
        m[(0, 1)] = -sin;
        m[(1, 0)] = sin;
        m[(1, 1)] = cos;
        m
    }

    /// Left-handed view matrix: `eye` maps to the origin and `target` onto +Z.
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Self {
        let forward = (target - eye).normalized();
        let right = up.cross(forward).normalized();
        let up = forward.cross(right);

        let mut m = Self::IDENTITY;
        m.set_row(0, right.extend(-right.dot(eye)));
        m.set_row(1, up.extend(-up.dot(eye)));
        m.set_row(2, forward.extend(-forward.dot(eye)));
        m
    }

    /// Left-handed perspective projection mapping view depth `near..far` to `0..1`.
    ///
    /// `fov_degrees` is the vertical field of view. `far` may be `f32::INFINITY`.
    pub fn perspective(
        fov_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<Self, MathError> {
        if !(fov_degrees > 0.0 && fov_degrees < 179.0) {
            return Err(MathError::InvalidFieldOfView(fov_degrees));
        }
        if !(aspect > 0.0) {
            return Err(MathError::InvalidAspectRatio(aspect));
        }
        if !(near > 0.0) {
            return Err(MathError::InvalidNearPlane(near));
        }
        if !(far > near) {
            return Err(MathError::InvalidFarPlane { near, far });
        }

        let y_scale = 1.0 / (fov_degrees.to_radians() * 0.5).tan();
        let x_scale = y_scale / aspect;
        let range = if far.is_infinite() { 1.0 } else { far / (far - near) };

        let mut m = Self::ZERO;
        m[(0, 0)] = x_scale;
        m[(1, 1)] = y_scale;
        m[(2, 2)] = range;
        m[(2, 3)] = -near * range;
        m[(3, 2)] = 1.0;
        Ok(m)
    }

    /// Transforms a point including the perspective divide by the resulting `w`.
    pub fn multiply_point(&self, p: Vector3) -> Vector3 {
        let v = *self * p.extend(1.0);
        v.truncate() / v.w
    }

    /// Transforms a point through the affine rows only; no divide.
    pub fn multiply_point3x4(&self, p: Vector3) -> Vector3 {
        Vector3::new(
            self[(0, 0)] * p.x + self[(0, 1)] * p.y + self[(0, 2)] * p.z + self[(0, 3)],
            self[(1, 0)] * p.x + self[(1, 1)] * p.y + self[(1, 2)] * p.z + self[(1, 3)],
            self[(2, 0)] * p.x + self[(2, 1)] * p.y + self[(2, 2)] * p.z + self[(2, 3)],
        )
    }

    /// Transforms a direction; translation is ignored.
    pub fn multiply_vector(&self, d: Vector3) -> Vector3 {
        Vector3::new(
            self[(0, 0)] * d.x + self[(0, 1)] * d.y + self[(0, 2)] * d.z,
            self[(1, 0)] * d.x + self[(1, 1)] * d.y + self[(1, 2)] * d.z,
            self[(2, 0)] * d.x + self[(2, 1)] * d.y + self[(2, 2)] * d.z,
        )
    }
}

impl Index<usize> for Matrix4x4 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Matrix4x4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl Index<(usize, usize)> for Matrix4x4 {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(row < 4 && col < 4, "matrix index ({}, {}) out of range", row, col);
        &self.data[col * 4 + row]
    }
}

impl IndexMut<(usize, usize)> for Matrix4x4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(row < 4 && col < 4, "matrix index ({}, {}) out of range", row, col);
        &mut self.data[col * 4 + row]
    }
}

/// Row-by-column product. Not commutative: `a * b` applies `b` first.
impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut result = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                result[(row, col)] = (0..4).map(|k| self[(row, k)] * rhs[(k, col)]).sum();
            }
        }
        result
    }
}

impl MulAssign for Matrix4x4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vector4> for Matrix4x4 {
    type Output = Vector4;

    fn mul(self, v: Vector4) -> Vector4 {
        Vector4::new(
            self.get_row(0).dot(v),
            self.get_row(1).dot(v),
            self.get_row(2).dot(v),
            self.get_row(3).dot(v),
        )
    }
}

impl std::fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..4 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.get_row(row))?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Matrix4x4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix4x4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Matrix4x4 {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

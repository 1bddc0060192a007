use super::scalar::clamp01;
use super::Vector4;

/// Linear RGBA color with `f32` channels, nominally in `0..=1`.
///
/// The default is transparent black (`CLEAR`); [`Color::rgb`] gives an opaque color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl_components!(Color, 4, r => 0, g => 1, b => 2, a => 3);
impl_approx!(Color, r, g, b, a);
impl_elementwise_ops!(Color, r, g, b, a);

impl Color {
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Blends every channel, alpha included; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.lerp_unclamped(other, clamp01(t))
    }

    pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl From<Vector4> for Color {
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Color> for Vector4 {
    fn from(c: Color) -> Self {
        Vector4::new(c.r, c.g, c.b, c.a)
    }
}

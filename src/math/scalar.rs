//! Scalar helpers shared by the vector and quaternion types.

pub const EPSILON: f32 = f32::EPSILON;
pub const DEG2RAD: f32 = std::f32::consts::PI / 180.0;
pub const RAD2DEG: f32 = 180.0 / std::f32::consts::PI;

#[inline]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * clamp01(t)
}

#[inline]
pub fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Where `x` sits between `a` and `b`, clamped to `[0, 1]`. Returns 0 for an empty range.
pub fn inverse_lerp(a: f32, b: f32, x: f32) -> f32 {
    if a != b {
        clamp01((x - a) / (b - a))
    } else {
        0.0
    }
}

/// Hermite interpolation of `t` between the edges `from` and `to`.
pub fn smooth_step(from: f32, to: f32, t: f32) -> f32 {
    let x = clamp01((t - from) / (to - from));
    x * x * (3.0 - 2.0 * x)
}

/// Loops `t` so it never leaves `[0, length]`.
pub fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0.0, length)
}

/// Maps `value` from the range `[from1, to1]` onto `[from2, to2]` without clamping.
pub fn remap(value: f32, from1: f32, to1: f32, from2: f32, to2: f32) -> f32 {
    (value - from1) / (to1 - from1) * (to2 - from2) + from2
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_clamps_t() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 2.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), 0.0);
        assert_eq!(lerp_unclamped(0.0, 10.0, 2.0), 20.0);
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(2.0, 4.0, 3.0), 0.5);
        assert_eq!(inverse_lerp(2.0, 4.0, 10.0), 1.0);
        assert_eq!(inverse_lerp(3.0, 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_smooth_step_edges() {
        assert_eq!(smooth_step(0.0, 1.0, 0.0), 0.0);
        assert_eq!(smooth_step(0.0, 1.0, 1.0), 1.0);
        assert_eq!(smooth_step(0.0, 1.0, 0.5), 0.5);
        assert!(smooth_step(0.0, 1.0, 0.25) < 0.25);
    }

    #[test]
    fn test_repeat_and_remap() {
        assert_relative_eq!(repeat(7.5, 3.0), 1.5, epsilon = 1e-6);
        assert_relative_eq!(repeat(-0.5, 3.0), 2.5, epsilon = 1e-6);
        assert_eq!(remap(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
    }

    #[test]
    fn test_degree_conversion() {
        assert_relative_eq!(180.0 * DEG2RAD, std::f32::consts::PI);
        assert_relative_eq!(std::f32::consts::FRAC_PI_2 * RAD2DEG, 90.0);
    }
}

/// Tolerance comparisons for component structs. `PartialEq` stays exact; these are
/// what tests and callers reach for when float drift is expected.
macro_rules! impl_approx {
    ($name:ident, $($field:ident),+) => {
        impl approx::AbsDiffEq for $name {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                <f32 as approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                $(<f32 as approx::AbsDiffEq>::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        impl approx::RelativeEq for $name {
            fn default_max_relative() -> f32 {
                <f32 as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                $(<f32 as approx::RelativeEq>::relative_eq(&self.$field, &other.$field, epsilon, max_relative))&&+
            }
        }

        impl approx::UlpsEq for $name {
            fn default_max_ulps() -> u32 {
                <f32 as approx::UlpsEq>::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                $(<f32 as approx::UlpsEq>::ulps_eq(&self.$field, &other.$field, epsilon, max_ulps))&&+
            }
        }
    };
}

/// Component-wise indexing and `(a, b, c)` display. Components are `f32` unless
/// the name is followed by `: <type>`.
macro_rules! impl_components {
    ($name:ident: $scalar:ty, $n:literal, $($field:ident => $idx:literal),+) => {
        impl $name {
            #[inline]
            pub fn to_array(self) -> [$scalar; $n] {
                [$(self.$field),+]
            }
        }

        impl From<[$scalar; $n]> for $name {
            #[inline]
            fn from(array: [$scalar; $n]) -> Self {
                Self { $($field: array[$idx]),+ }
            }
        }

        impl From<$name> for [$scalar; $n] {
            #[inline]
            fn from(value: $name) -> Self {
                value.to_array()
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = $scalar;

            fn index(&self, index: usize) -> &$scalar {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!("index {} out of range for {}", index, stringify!($name)),
                }
            }
        }

        impl std::ops::IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut $scalar {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => panic!("index {} out of range for {}", index, stringify!($name)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let components = self.to_array();
                write!(f, "(")?;
                for (i, component) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", component)?;
                }
                write!(f, ")")
            }
        }
    };
    ($name:ident, $n:literal, $($field:ident => $idx:literal),+) => {
        impl_components!($name: f32, $n, $($field => $idx),+);
    };
}

/// Component-wise `+ - * /` against the same type and against a scalar, plus negation.
macro_rules! impl_elementwise_ops {
    ($name:ident, $($field:ident),+) => {
        impl std::ops::Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::Add<f32> for $name {
            type Output = Self;
            #[inline]
            fn add(self, rhs: f32) -> Self {
                Self { $($field: self.$field + rhs),+ }
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl std::ops::Sub<f32> for $name {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: f32) -> Self {
                Self { $($field: self.$field - rhs),+ }
            }
        }

        impl std::ops::Mul for $name {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl std::ops::Mul<$name> for f32 {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl std::ops::Div for $name {
            type Output = Self;
            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl std::ops::Div<f32> for $name {
            type Output = Self;
            #[inline]
            fn div(self, rhs: f32) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl std::ops::DivAssign<f32> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }
    };
}

/// The algebra every vector width shares.
macro_rules! impl_vector {
    ($name:ident, $($field:ident),+) => {
        impl $name {
            pub const ZERO: Self = Self { $($field: 0.0),+ };
            pub const ONE: Self = Self { $($field: 1.0),+ };

            #[inline]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            #[inline]
            pub const fn splat(value: f32) -> Self {
                Self { $($field: value),+ }
            }

            #[inline]
            pub fn dot(self, rhs: Self) -> f32 {
                0.0 $(+ self.$field * rhs.$field)+
            }

            #[inline]
            pub fn sqr_magnitude(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn magnitude(self) -> f32 {
                self.sqr_magnitude().sqrt()
            }

            /// Unit-length copy of this vector. Vectors too short to carry a direction
            /// normalize to `ZERO` rather than NaN.
            pub fn normalized(self) -> Self {
                let magnitude = self.magnitude();
                if magnitude > $crate::math::scalar::EPSILON {
                    self / magnitude
                } else {
                    Self::ZERO
                }
            }

            pub fn normalize(&mut self) {
                *self = self.normalized();
            }

            #[inline]
            pub fn distance(self, other: Self) -> f32 {
                (self - other).magnitude()
            }

            /// Angle between two vectors in degrees; zero when either is degenerate.
            pub fn angle(self, to: Self) -> f32 {
                let denominator = (self.sqr_magnitude() * to.sqr_magnitude()).sqrt();
                if denominator < 1e-15 {
                    return 0.0;
                }
                let cos = (self.dot(to) / denominator).clamp(-1.0, 1.0);
                cos.acos() * $crate::math::scalar::RAD2DEG
            }

            /// Mirrors `self` about the plane defined by `normal`.
            pub fn reflect(self, normal: Self) -> Self {
                let factor = -2.0 * normal.dot(self);
                Self { $($field: factor * normal.$field + self.$field),+ }
            }

            /// Component of `self` along `onto`; `ZERO` when `onto` is (near) zero.
            pub fn project(self, onto: Self) -> Self {
                let sqr_magnitude = onto.sqr_magnitude();
                if sqr_magnitude < $crate::math::scalar::EPSILON {
                    return Self::ZERO;
                }
                onto * (self.dot(onto) / sqr_magnitude)
            }

            /// Interpolates towards `other`; `t` is clamped to `[0, 1]`.
            pub fn lerp(self, other: Self, t: f32) -> Self {
                self.lerp_unclamped(other, $crate::math::scalar::clamp01(t))
            }

            pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
                Self { $($field: self.$field + (other.$field - self.$field) * t),+ }
            }

            /// Steps towards `target` by at most `max_distance_delta`, never overshooting.
            pub fn move_towards(self, target: Self, max_distance_delta: f32) -> Self {
                let to_target = target - self;
                let sqr_distance = to_target.sqr_magnitude();
                if sqr_distance == 0.0
                    || (max_distance_delta >= 0.0
                        && sqr_distance <= max_distance_delta * max_distance_delta)
                {
                    return target;
                }
                self + to_target / sqr_distance.sqrt() * max_distance_delta
            }
        }

        impl_elementwise_ops!($name, $($field),+);
    };
}

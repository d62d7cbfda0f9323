//! Component-wise operations shared by Vec2, Vec3 and Vec4

/// Implements the GLSL-style component-wise API and the `std::ops` operators
/// for a vector struct with the listed `f32` fields.
macro_rules! impl_vector {
    ($name:ident { $($f:ident),+ }) => {
        impl $name {
            /// All components set to `v`
            #[inline]
            pub const fn splat(v: f32) -> Self {
                Self { $($f: v),+ }
            }

            /// Apply `op` to every component
            #[inline]
            pub fn map(self, op: impl Fn(f32) -> f32) -> Self {
                Self { $($f: op(self.$f)),+ }
            }

            /// Dot product
            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                0.0 $(+ self.$f * other.$f)+
            }

            /// Length squared (faster than length)
            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            /// Length (magnitude)
            #[inline]
            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Normalize to unit length
            ///
            /// The zero vector normalizes to itself rather than dividing by zero.
            #[inline]
            pub fn normalize(self) -> Self {
                debug_assert!(
                    true $(&& self.$f.is_finite())+,
                    "normalize called with non-finite vector {:?}",
                    self
                );
                let len = self.length();
                if len != 0.0 {
                    self / len
                } else {
                    Self::ZERO
                }
            }

            /// Component-wise absolute value
            #[inline]
            pub fn abs(self) -> Self {
                Self { $($f: self.$f.abs()),+ }
            }

            /// Component-wise floor
            #[inline]
            pub fn floor(self) -> Self {
                Self { $($f: self.$f.floor()),+ }
            }

            /// Component-wise `a - floor(a)`
            #[inline]
            pub fn fract(self) -> Self {
                Self { $($f: $crate::scalar::fract(self.$f)),+ }
            }

            /// Component-wise sine
            #[inline]
            pub fn sin(self) -> Self {
                Self { $($f: self.$f.sin()),+ }
            }

            /// Component-wise cosine
            #[inline]
            pub fn cos(self) -> Self {
                Self { $($f: self.$f.cos()),+ }
            }

            /// Component-wise exact sign (-1, 0, +1)
            #[inline]
            pub fn sign(self) -> Self {
                Self { $($f: $crate::scalar::sign(self.$f)),+ }
            }

            /// Component-wise minimum
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self { $($f: self.$f.min(other.$f)),+ }
            }

            /// Component-wise maximum
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self { $($f: self.$f.max(other.$f)),+ }
            }

            /// Minimum of each component and a scalar
            #[inline]
            pub fn min_scalar(self, s: f32) -> Self {
                Self { $($f: self.$f.min(s)),+ }
            }

            /// Maximum of each component and a scalar
            #[inline]
            pub fn max_scalar(self, s: f32) -> Self {
                Self { $($f: self.$f.max(s)),+ }
            }

            /// Clamp each component to `[lo, hi]`
            #[inline]
            pub fn clamp(self, lo: f32, hi: f32) -> Self {
                Self { $($f: $crate::scalar::clamp(self.$f, lo, hi)),+ }
            }

            /// Component-wise safe power with per-component exponents
            #[inline]
            pub fn pow(self, exp: Self) -> Self {
                Self { $($f: $crate::scalar::spow(self.$f, exp.$f)),+ }
            }

            /// Component-wise safe power with a shared exponent
            #[inline]
            pub fn powf(self, exp: f32) -> Self {
                Self { $($f: $crate::scalar::spow(self.$f, exp)),+ }
            }

            /// Linear interpolation, `self * (1 - t) + other * t`
            #[inline]
            pub fn mix(self, other: Self, t: f32) -> Self {
                Self { $($f: $crate::scalar::mix(self.$f, other.$f, t)),+ }
            }

            /// Largest component
            #[inline]
            pub fn max_element(self) -> f32 {
                f32::NEG_INFINITY $(.max(self.$f))+
            }
        }

        impl std::ops::Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, other: Self) -> Self {
                Self { $($f: self.$f + other.$f),+ }
            }
        }

        impl std::ops::Add<f32> for $name {
            type Output = Self;
            #[inline]
            fn add(self, scalar: f32) -> Self {
                Self { $($f: self.$f + scalar),+ }
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                $(self.$f += other.$f;)+
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, other: Self) -> Self {
                Self { $($f: self.$f - other.$f),+ }
            }
        }

        impl std::ops::Sub<f32> for $name {
            type Output = Self;
            #[inline]
            fn sub(self, scalar: f32) -> Self {
                Self { $($f: self.$f - scalar),+ }
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                $(self.$f -= other.$f;)+
            }
        }

        impl std::ops::Mul for $name {
            type Output = Self;
            #[inline]
            fn mul(self, other: Self) -> Self {
                Self { $($f: self.$f * other.$f),+ }
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, scalar: f32) -> Self {
                Self { $($f: self.$f * scalar),+ }
            }
        }

        impl std::ops::MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, scalar: f32) {
                $(self.$f *= scalar;)+
            }
        }

        impl std::ops::Div for $name {
            type Output = Self;
            #[inline]
            fn div(self, other: Self) -> Self {
                Self { $($f: self.$f / other.$f),+ }
            }
        }

        impl std::ops::Div<f32> for $name {
            type Output = Self;
            #[inline]
            fn div(self, scalar: f32) -> Self {
                Self { $($f: self.$f / scalar),+ }
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }
    };
}

pub(crate) use impl_vector;

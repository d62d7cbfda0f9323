//! 2x2 matrix for plane rotations
//!
//! Stored as two column vectors. Vectors are treated as rows and multiplied
//! from the left (`v * m`), which is how the rotation helpers on [`Vec3`]
//! apply it to a pair of axes.
//!
//! [`Vec3`]: crate::Vec3

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vec2;

/// 2x2 matrix (column-major)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat2 {
    pub c1: Vec2,
    pub c2: Vec2,
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat2 {
    pub const IDENTITY: Self = Self {
        c1: Vec2::X,
        c2: Vec2::Y,
    };

    /// Create a matrix from its columns
    #[inline]
    pub const fn from_cols(c1: Vec2, c2: Vec2) -> Self {
        Self { c1, c2 }
    }

    /// Create a matrix from column components `(c1x, c1y, c2x, c2y)`
    #[inline]
    pub const fn new(c1x: f32, c1y: f32, c2x: f32, c2y: f32) -> Self {
        Self::from_cols(Vec2::new(c1x, c1y), Vec2::new(c2x, c2y))
    }

    /// Rotation by `angle` radians: columns `(cos, sin)` and `(-sin, cos)`
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s, -s, c)
    }

    /// Uniform or non-uniform scale
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy)
    }

    /// Swap rows and columns
    pub fn transpose(self) -> Self {
        Self::new(self.c1.x, self.c2.x, self.c1.y, self.c2.y)
    }

    /// Determinant
    pub fn determinant(self) -> f32 {
        self.c1.x * self.c2.y - self.c2.x * self.c1.y
    }
}

/// Matrix product: `(v * a) * b == v * (a * b)`
impl std::ops::Mul for Mat2 {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        let t = self.transpose();
        Self::new(
            t.c1.dot(other.c1),
            t.c2.dot(other.c1),
            t.c1.dot(other.c2),
            t.c2.dot(other.c2),
        )
    }
}

/// Column-vector product `m * v`: counter-clockwise for a rotation matrix.
impl std::ops::Mul<Vec2> for Mat2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, v: Vec2) -> Vec2 {
        self.c1 * v.x + self.c2 * v.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_identity() {
        let v = Vec2::new(3.0, -2.0);
        assert_eq!(v * Mat2::IDENTITY, v);
    }

    #[test]
    fn test_rotation_columns() {
        let m = Mat2::rotation(FRAC_PI_2);
        assert!(vec_approx_eq(m.c1, Vec2::new(0.0, 1.0)));
        assert!(vec_approx_eq(m.c2, Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn test_rotation_determinant() {
        assert!((Mat2::rotation(0.83).determinant() - 1.0).abs() < EPSILON);
        assert_eq!(Mat2::scale(2.0, 3.0).determinant(), 6.0);
    }

    #[test]
    fn test_mul_composition() {
        // Two 45° rotations should equal one 90° rotation
        let r45 = Mat2::rotation(FRAC_PI_4);
        let composed = r45 * r45;

        let v = Vec2::new(1.0, 0.0);
        let stepwise = (v * r45) * r45;
        assert!(vec_approx_eq(v * composed, stepwise),
            "Composed: {:?}, Stepwise: {:?}", v * composed, stepwise);
        assert!(vec_approx_eq(stepwise, Vec2::new(0.0, -1.0)));
    }

    #[test]
    fn test_column_product_is_transposed_row_product() {
        let m = Mat2::rotation(0.4);
        let v = Vec2::new(0.3, -1.2);
        assert!(vec_approx_eq(m * v, v * m.transpose()));
    }

    #[test]
    fn test_mul_non_commutative_order() {
        let r = Mat2::rotation(FRAC_PI_2);
        let s = Mat2::scale(2.0, 1.0);
        let v = Vec2::new(1.0, 0.0);
        assert!(vec_approx_eq(v * (r * s), (v * r) * s));
        assert!(vec_approx_eq(v * (s * r), (v * s) * r));
    }
}

//! 3D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::macros::impl_vector;
use crate::{Mat2, Vec2};

/// 3D Vector with x, y, z components
///
/// Y is up. Scene and camera code treat the XZ plane as the ground.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new Vec3
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Cross product
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn xz(self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    #[inline]
    pub fn yz(self) -> Vec2 {
        Vec2::new(self.y, self.z)
    }

    /// Extract the components as an array
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Rotate the x/y pair by `angle`, leaving z untouched
    ///
    /// Uses the row-vector product `(x, y) * Mat2::rotation(angle)`.
    #[inline]
    pub fn rot_xy(self, angle: f32) -> Self {
        let r = self.xy() * Mat2::rotation(angle);
        Self::new(r.x, r.y, self.z)
    }

    /// Rotate the x/z pair by `angle`, leaving y untouched
    #[inline]
    pub fn rot_xz(self, angle: f32) -> Self {
        let r = self.xz() * Mat2::rotation(angle);
        Self::new(r.x, self.y, r.y)
    }

    /// Rotate the y/z pair by `angle`, leaving x untouched
    #[inline]
    pub fn rot_yz(self, angle: f32) -> Self {
        let r = self.yz() * Mat2::rotation(angle);
        Self::new(self.x, r.x, r.y)
    }
}

impl_vector!(Vec3 { x, y, z });

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        // 4 + 10 + 18
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn test_cross_basis() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
    }

    #[test]
    fn test_cross_anticommutative() {
        let a = Vec3::new(0.3, -1.7, 2.2);
        let b = Vec3::new(-4.0, 0.5, 1.1);
        assert!(vec_approx_eq(a.cross(b), -b.cross(a)));
    }

    #[test]
    fn test_cross_is_orthogonal() {
        let a = Vec3::new(1.0, 2.0, -0.5);
        let b = Vec3::new(-3.0, 0.25, 4.0);
        let c = a.cross(b);
        assert!(approx_eq(c.dot(a), 0.0));
        assert!(approx_eq(c.dot(b), 0.0));
    }

    #[test]
    fn test_normalize_unit_length() {
        for v in [
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-0.001, 0.002, 0.0005),
            Vec3::new(100.0, -250.0, 3.0),
        ] {
            assert!(approx_eq(v.normalize().length(), 1.0), "{:?}", v);
        }
    }

    #[test]
    fn test_normalize_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }

    #[test]
    fn test_fract_negative() {
        let f = Vec3::new(-0.3, 1.25, -2.0).fract();
        assert!(vec_approx_eq(f, Vec3::new(0.7, 0.25, 0.0)));
    }

    #[test]
    fn test_floor() {
        let f = Vec3::new(-0.3, 1.25, -2.0).floor();
        assert_eq!(f, Vec3::new(-1.0, 1.0, -2.0));
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(-7.0, 0.5, 9.0);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Vec3::new(-3.0, -0.75, 6.0));
    }

    #[test]
    fn test_sign() {
        let s = Vec3::new(-2.0, 0.0, 0.1).sign();
        assert_eq!(s, Vec3::new(-1.0, 0.0, 1.0));
    }

    #[test]
    fn test_abs_max_element() {
        let v = Vec3::new(-5.0, 2.0, 3.0);
        assert_eq!(v.abs(), Vec3::new(5.0, 2.0, 3.0));
        assert_eq!(v.max_element(), 3.0);
    }

    #[test]
    fn test_pow_safe() {
        let v = Vec3::new(-1.0, 4.0, 9.0).pow(Vec3::new(0.5, 0.5, 0.5));
        assert_eq!(v.x, 0.0);
        assert!(vec_approx_eq(v, Vec3::new(0.0, 2.0, 3.0)));
    }

    #[test]
    fn test_rot_xz_leaves_y() {
        let v = Vec3::new(1.0, 7.0, 0.0);
        let r = v.rot_xz(FRAC_PI_2);
        assert!(approx_eq(r.y, 7.0));
        assert!(vec_approx_eq(r, Vec3::new(0.0, 7.0, -1.0)), "got {:?}", r);
    }

    #[test]
    fn test_rot_yz_leaves_x() {
        let v = Vec3::new(4.0, 0.0, 1.0);
        let r = v.rot_yz(FRAC_PI_2);
        assert!(vec_approx_eq(r, Vec3::new(4.0, 1.0, 0.0)), "got {:?}", r);
    }

    #[test]
    fn test_rot_xy_leaves_z() {
        let v = Vec3::new(0.0, 2.0, -3.0);
        let r = v.rot_xy(0.5);
        assert!(approx_eq(r.z, -3.0));
        assert!(approx_eq(r.xy().length(), 2.0));
    }

    #[test]
    fn test_swizzles() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.xy(), Vec2::new(1.0, 2.0));
        assert_eq!(v.xz(), Vec2::new(1.0, 3.0));
        assert_eq!(v.yz(), Vec2::new(2.0, 3.0));
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    }
}

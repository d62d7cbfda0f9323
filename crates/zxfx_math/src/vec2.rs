//! 2D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::macros::impl_vector;
use crate::Mat2;

/// 2D Vector with x, y components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Create a new Vec2
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotate counter-clockwise by `angle` radians
    ///
    /// `Vec2::X.rotate_plane(FRAC_PI_2)` is `Vec2::Y`. Note that the row-vector
    /// product `v * Mat2::rotation(angle)` turns the other way.
    #[inline]
    pub fn rotate_plane(self, angle: f32) -> Self {
        Mat2::rotation(angle) * self
    }
}

impl_vector!(Vec2 { x, y });

/// Row vector times matrix: each result component is a dot with one column.
impl std::ops::Mul<Mat2> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, m: Mat2) -> Self {
        Self::new(self.dot(m.c1), self.dot(m.c2))
    }
}

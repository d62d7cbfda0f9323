//! Distance primitives, combinators and domain transforms
//!
//! Primitives take a point already expressed in the shape's local frame.
//! Domain transforms ([`repeat`], [`fold`]) act on coordinates before a
//! primitive is evaluated.

use zxfx_math::{clamp, mix, Vec3};

/// Signed distance to an axis-aligned box centred on the origin
///
/// Exact outside; inside it returns the (negative) distance to the nearest face.
#[inline]
pub fn sd_box(p: Vec3, half_extents: Vec3) -> f32 {
    let q = p.abs() - half_extents;
    q.max_scalar(0.0).length() + q.max_element().min(0.0)
}

/// Signed distance to a sphere centred on the origin
#[inline]
pub fn sd_sphere(p: Vec3, radius: f32) -> f32 {
    p.length() - radius
}

/// Signed distance to the half-space below `height` (Y up)
#[inline]
pub fn sd_plane_y(p: Vec3, height: f32) -> f32 {
    p.y - height
}

#[inline]
pub fn op_union(a: f32, b: f32) -> f32 {
    a.min(b)
}

#[inline]
pub fn op_intersection(a: f32, b: f32) -> f32 {
    a.max(b)
}

/// `a` with `b` carved out
#[inline]
pub fn op_subtraction(a: f32, b: f32) -> f32 {
    a.max(-b)
}

/// Polynomial blend shared by the smooth combinators; `k` may be negative.
#[inline]
fn poly_blend(a: f32, b: f32, k: f32) -> f32 {
    let h = clamp(0.5 + 0.5 * (b - a) / k, 0.0, 1.0);
    mix(b, a, h) - k * h * (1.0 - h)
}

/// Polynomial smooth minimum with blend radius `k`
pub fn smooth_min(a: f32, b: f32, k: f32) -> f32 {
    if k <= 0.0 {
        return a.min(b);
    }
    poly_blend(a, b, k)
}

/// Polynomial smooth maximum with blend radius `k`
pub fn smooth_max(a: f32, b: f32, k: f32) -> f32 {
    if k <= 0.0 {
        return a.max(b);
    }
    poly_blend(a, b, -k)
}

/// Tile a coordinate with the given period, centring each tile on zero
///
/// Uses truncating remainder like C `fmod`, so tiles on the negative side are
/// shifted rather than mirrored. The scene depends on that asymmetry.
#[inline]
pub fn repeat(coord: f32, offset: f32, period: f32) -> f32 {
    (coord - offset) % period - period * 0.5
}

/// Mirror a coordinate about zero and shift it outwards by `offset`
#[inline]
pub fn fold(coord: f32, offset: f32) -> f32 {
    coord.abs() - offset
}

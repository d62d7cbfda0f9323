//! Scalar GLSL-style helpers
//!
//! These mirror the shader built-ins the vector types are composed from.
//! All of them are total: negative bases never reach `powf` with a fractional
//! exponent and `clamp` tolerates inverted bounds.

/// Safe power: negative bases yield 0 instead of NaN
#[inline]
pub fn spow(base: f32, exp: f32) -> f32 {
    if base >= 0.0 {
        base.powf(exp)
    } else {
        0.0
    }
}

/// Fractional part, `a - floor(a)`
///
/// Unlike `f32::fract` this wraps negative inputs into `[0, 1)`:
/// `fract(-0.3) == 0.7`.
#[inline]
pub fn fract(a: f32) -> f32 {
    a - a.floor()
}

/// `min(max(a, lo), hi)`
///
/// `f32::clamp` panics when `lo > hi`; this never does.
#[inline]
pub fn clamp(a: f32, lo: f32, hi: f32) -> f32 {
    a.max(lo).min(hi)
}

/// Linear interpolation, `a * (1 - t) + b * t`
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Exact sign: -1, 0 or +1
#[inline]
pub fn sign(a: f32) -> f32 {
    if a > 0.0 {
        1.0
    } else if a < 0.0 {
        -1.0
    } else {
        0.0
    }
}

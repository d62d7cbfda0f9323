//! Hash-based 3D value noise
//!
//! Lattice corners are hashed with `fract(sin(h) * 43.5453)` where `h` is the
//! dot of the integer cell with [`HASH_SEED`]. The four corners sharing an x
//! offset are packed into one [`Vec4`] so a single sin/fract pass hashes them.

use zxfx_math::{mix, Vec3, Vec4};

/// Per-axis lattice stride for the corner hash
pub const HASH_SEED: Vec3 = Vec3::new(7.0, 157.0, 113.0);

const HASH_SCALE: f32 = 43.5453;

/// Hash of a single lattice offset
#[inline]
pub fn hash(h: f32) -> f32 {
    zxfx_math::fract(h.sin() * HASH_SCALE)
}

#[inline]
fn hash4(h: Vec4) -> Vec4 {
    (h.sin() * HASH_SCALE).fract()
}

/// Hermite ease `f * f * (3 - 2f)` applied per component
#[inline]
pub fn ease(f: Vec3) -> Vec3 {
    f * (f * (f * -2.0 + 3.0))
}

/// Smooth, deterministic value noise in `[0, 1)`
///
/// Continuous across integer cell boundaries. At an integer lattice point the
/// result is exactly the hash of that corner.
pub fn value_noise3(p: Vec3) -> f32 {
    let ip = p.floor();
    let w = ease(p.fract());

    // Offsets for corners (0,0,0), (0,1,0), (0,0,1), (0,1,1); +x adds HASH_SEED.x
    let h = Vec4::new(0.0, HASH_SEED.y, HASH_SEED.z, 270.0) + ip.dot(HASH_SEED);
    let h = hash4(h).mix(hash4(h + HASH_SEED.x), w.x);
    let r = h.xz().mix(h.yw(), w.y);
    mix(r.x, r.y, w.z)
}

/// Hash value of the lattice corner at integer coordinates `cell`
pub fn lattice_value(cell: Vec3) -> f32 {
    hash(cell.floor().dot(HASH_SEED))
}

//! Scene distance fields
//!
//! [`SignedDistanceField`] is the seam between scene descriptions and the
//! raymarcher. [`MoonScene`] is the lunar-lander landing site: noisy regolith
//! blended with a raised arena platform that is ringed by repeated wall slats.

use zxfx_math::{sign, spow, Vec2, Vec3};

use crate::noise::value_noise3;
use crate::primitives::{fold, repeat, sd_box, sd_plane_y, smooth_max};

/// A scalar field that approximates signed distance to a surface
///
/// Negative inside, zero on the surface, positive outside. Implementations
/// must be pure: the same point always yields the same value.
pub trait SignedDistanceField: Send + Sync {
    /// Evaluate the field at `p`
    fn distance(&self, p: Vec3) -> f32;
}

impl<F> SignedDistanceField for F
where
    F: Fn(Vec3) -> f32 + Send + Sync,
{
    #[inline]
    fn distance(&self, p: Vec3) -> f32 {
        self(p)
    }
}

/// Octaves of the surface bump: (frequency, amplitude)
pub const BUMP_OCTAVES: [(f32, f32); 5] = [
    (1.0, 1.0),
    (2.12, 0.5),
    (4.42, 0.25),
    (8.54, 0.125),
    (63.52, 0.0156),
];

/// Crater centre in the XZ plane; bumps are strongest here
pub const BUMP_ANCHOR: Vec2 = Vec2::new(0.5, 2.2);

const GROUND_HEIGHT: f32 = 0.27;
const BLEND_RADIUS: f32 = 0.8;

/// The "One Small Step" landing site
#[derive(Clone, Copy, Debug, Default)]
pub struct MoonScene;

impl MoonScene {
    pub fn new() -> Self {
        Self
    }

    /// Summed noise octaves before localisation
    pub fn relief(p: Vec3) -> f32 {
        BUMP_OCTAVES
            .iter()
            .map(|&(freq, amp)| value_noise3(p * freq) * amp)
            .sum()
    }

    /// Gain applied to [`relief`](Self::relief): 2.5 at [`BUMP_ANCHOR`], 0.5 far away
    pub fn bump_gain(p: Vec3) -> f32 {
        let falloff = (-spow((p.xz() - BUMP_ANCHOR).length(), 2.0) * 0.26).exp();
        0.5 + 2.0 * falloff
    }

    /// Fractal noise height, localised around [`BUMP_ANCHOR`]
    pub fn bump(p: Vec3) -> f32 {
        Self::relief(p) * 0.5 * Self::bump_gain(p)
    }

    /// Wall geometry: slats along z, a slab under them and two folded side walls
    fn walls(p: Vec3) -> f32 {
        let mut tp = p;
        tp.z = repeat(tp.z, 0.5, 0.4);
        let slats = sd_box(tp, Vec3::new(2.0, 0.16, 0.12 + tp.y * 0.25));
        let slab = sd_box(p - Vec3::new(0.0, 0.0, 1.1), Vec3::new(2.0, 0.16, 1.7));
        let t = slats.max(slab);

        let mut tp = p;
        tp.x = fold(p.x, 1.65);
        tp.z -= 1.1;
        t.min(sd_box(tp, Vec3::new(0.53 - 0.12 * tp.z, 0.16, 1.6)))
    }

    /// Radial arena footprint, one of three branches picked by `k`
    fn arena(p: Vec3) -> f32 {
        let q = Vec2::new(p.x.abs(), p.z);
        let k = q.x * 0.12 + q.y;
        if k < 0.0 {
            q.length() - 1.2
        } else if k > 2.48 {
            (q - Vec2::new(0.0, 2.5)).length() - 1.5
        } else {
            q.dot(Vec2::new(0.99, -0.12)) - 1.2
        }
    }
}

impl SignedDistanceField for MoonScene {
    fn distance(&self, p: Vec3) -> f32 {
        let bmp = Self::bump(p);
        let a = sd_plane_y(p, GROUND_HEIGHT) - bmp;
        let mut b = (bmp * bmp * 0.5 - 0.5) * 0.12;

        // Arena frame: flipped in x/y and pinched along z
        let mut p = Vec3::new(-p.x, -p.y, p.z);
        p.x /= 0.95 - ((p.z + 1.2 - sign(p.x)) * 0.8).cos() * 0.1;
        let t = Self::walls(p);

        p.z /= (p.z * 0.1).cos();
        let r = Self::arena(p);

        b -= r.max(p.y).max(-t);
        smooth_max(a, b, BLEND_RADIUS)
    }
}

/// Evaluate the default scene at `p`
#[inline]
pub fn scene_field(p: Vec3) -> f32 {
    MoonScene.distance(p)
}

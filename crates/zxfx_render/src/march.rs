//! Sphere tracing, normal estimation and lighting
//!
//! The march runs a fixed step budget with no far-plane guard. When the budget
//! runs out without reaching the surface, the last sample point is still lit
//! and fogged, so misses fade to a dim value instead of a background colour.

use serde::{Serialize, Deserialize};
use zxfx_field::SignedDistanceField;
use zxfx_math::Vec3;

/// Tunables for [`march`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarchSettings {
    /// Distance along the ray of the first sample
    pub start_distance: f32,
    /// Maximum number of field evaluations along the ray
    pub max_steps: u32,
    /// |distance| below which the ray counts as a hit
    pub hit_threshold: f32,
    /// Exponential fog coefficient applied to the travelled distance
    pub fog_density: f32,
    /// Offset of the normal-estimation taps
    pub normal_epsilon: f32,
    /// Point light position
    pub light_position: Vec3,
    /// Lighting floor
    pub ambient: f32,
    /// Weight of the diffuse term
    pub diffuse: f32,
}

impl Default for MarchSettings {
    fn default() -> Self {
        Self {
            start_distance: 0.01,
            max_steps: 15,
            hit_threshold: 0.025,
            fog_density: 0.14,
            normal_epsilon: 0.01,
            light_position: Vec3::new(6.0, 3.0, -10.0),
            ambient: 0.1,
            diffuse: 0.9,
        }
    }
}

/// Outcome of one ray
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarchHit {
    /// Lit and fogged brightness, never negative for finite input
    pub brightness: f32,
    /// Distance travelled along the ray
    pub distance: f32,
    /// Field evaluations performed
    pub steps: u32,
    /// Whether the surface threshold was reached before the budget ran out
    pub converged: bool,
    /// Last sample point
    pub position: Vec3,
}

/// 1/sqrt(3): scales the tetrahedron vertices to unit length
const TETRA_SCALE: f32 = 0.5773;

/// Tetrahedral gradient estimate of the field at `p`
///
/// Samples the four vertices of a tetrahedron around `p` and sums the
/// vertex directions weighted by the field value there.
pub fn estimate_normal<F>(field: &F, p: Vec3, epsilon: f32) -> Vec3
where
    F: SignedDistanceField + ?Sized,
{
    let mut n = Vec3::ZERO;
    for i in 0..4u32 {
        let o = Vec3::new(
            (((i + 3) >> 1) & 1) as f32,
            ((i >> 1) & 1) as f32,
            (i & 1) as f32,
        );
        let e = (o * 2.0 - 1.0) * TETRA_SCALE;
        n += e * field.distance(p + e * epsilon);
    }
    n.normalize()
}

/// Diffuse lighting at `p` from the settings' point light
pub fn lighting<F>(field: &F, p: Vec3, settings: &MarchSettings) -> f32
where
    F: SignedDistanceField + ?Sized,
{
    let ld = (settings.light_position - p).normalize();
    let n = estimate_normal(field, p, settings.normal_epsilon);
    (settings.ambient + settings.diffuse * ld.dot(n)).max(0.0)
}

/// Trace a ray and return the full hit record
pub fn march_detailed<F>(field: &F, origin: Vec3, direction: Vec3, settings: &MarchSettings) -> MarchHit
where
    F: SignedDistanceField + ?Sized,
{
    let mut d = settings.start_distance;
    let mut p = origin + direction * d;
    let mut steps = 0;
    let mut converged = false;

    while steps < settings.max_steps {
        p = origin + direction * d;
        let h = field.distance(p);
        steps += 1;
        if h.abs() < settings.hit_threshold {
            converged = true;
            break;
        }
        d += h;
    }

    let brightness = lighting(field, p, settings) * (-d * settings.fog_density).exp();
    MarchHit {
        brightness,
        distance: d,
        steps,
        converged,
        position: p,
    }
}

/// Trace a ray and return its brightness
#[inline]
pub fn march<F>(field: &F, origin: Vec3, direction: Vec3, settings: &MarchSettings) -> f32
where
    F: SignedDistanceField + ?Sized,
{
    march_detailed(field, origin, direction, settings).brightness
}

//! Signed distance fields for the zxfx raymarcher
//!
//! - [`noise`] - hash-based 3D value noise
//! - [`primitives`] - box/sphere distances, smooth combinators, domain repetition and folding
//! - [`scene`] - the [`SignedDistanceField`] trait and the [`MoonScene`] landing site

pub mod noise;
pub mod primitives;
pub mod scene;

pub use noise::value_noise3;
pub use primitives::{sd_box, sd_sphere, smooth_max, smooth_min};
pub use scene::{scene_field, MoonScene, SignedDistanceField};

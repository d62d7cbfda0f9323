//! Raymarched frame rendering
//!
//! This crate turns a [`SignedDistanceField`] into a dithered display frame.
//!
//! ## Key Components
//!
//! - [`march`] - sphere tracing, tetrahedral normals and point-light shading
//! - [`camera::Camera`] - orbiting look-at camera and per-pixel shading
//! - [`frame::FrameRenderer`] - row-parallel shading, banding and dithering onto a surface

pub mod camera;
pub mod frame;
pub mod march;

pub use camera::{shade_pixel, Camera, CameraSettings};
pub use frame::{classify, dither_map, Band, FrameRenderer, FrameStats, ShadeMap};
pub use march::{estimate_normal, lighting, march, march_detailed, MarchHit, MarchSettings};

// Re-export the field trait so callers can render custom scenes
pub use zxfx_field::{MoonScene, SignedDistanceField};

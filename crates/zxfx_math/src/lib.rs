//! GLSL-style Mathematics Library
//!
//! This crate provides the small vector toolkit shared by the zxfx effects.
//! Every type is a `Copy` value: operations return new vectors and never
//! mutate their inputs.
//!
//! ## Core Types
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - float vectors with component-wise operators
//! - [`Mat2`] - 2x2 matrix used for plane rotations
//!
//! ## Scalar Helpers
//!
//! [`scalar`] holds the shader built-ins (`fract`, `mix`, `clamp`, `sign`,
//! `spow`) the vector operations are built from.

mod macros;
mod vec2;
mod vec3;
mod vec4;
pub mod mat2;
pub mod scalar;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat2::Mat2;
pub use scalar::{clamp, fract, mix, sign, spow};

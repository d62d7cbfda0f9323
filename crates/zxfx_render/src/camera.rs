//! Pinhole camera and per-pixel shading
//!
//! The camera orbits its target: the eye starts at a fixed offset, is pitched
//! in the YZ plane and then swung around in the XZ plane before the basis is
//! built from the look-at direction and world up.

use serde::{Serialize, Deserialize};
use zxfx_field::SignedDistanceField;
use zxfx_math::{Vec2, Vec3};

use crate::march::{march, MarchSettings};

/// Placement of the camera before the basis is derived
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Eye position before rotation
    pub eye: Vec3,
    /// Rotation applied to the eye in the YZ plane (radians)
    pub pitch: f32,
    /// Rotation applied to the eye in the XZ plane (radians)
    pub yaw: f32,
    /// Point the camera looks at
    pub target: Vec3,
    /// Brightness multiplier applied before squaring
    pub exposure: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.2, -4.0),
            pitch: -0.6,
            yaw: 1.1,
            target: Vec3::new(0.0, 0.0, 0.8),
            exposure: 2.5,
        }
    }
}

/// Camera basis: origin plus forward/right/up vectors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub exposure: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default())
    }
}

impl Camera {
    /// Camera at `origin` looking at `target`, with Y as world up
    pub fn looking_at(origin: Vec3, target: Vec3) -> Self {
        let forward = (target - origin).normalize();
        let right = Vec3::Y.cross(forward).normalize();
        let up = forward.cross(right);
        Self {
            origin,
            forward,
            right,
            up,
            exposure: CameraSettings::default().exposure,
        }
    }

    /// Build the basis from placement settings
    pub fn from_settings(settings: &CameraSettings) -> Self {
        let origin = settings.eye.rot_yz(settings.pitch).rot_xz(settings.yaw);
        Self {
            exposure: settings.exposure,
            ..Self::looking_at(origin, settings.target)
        }
    }

    /// Normalized ray direction through screen offset `uv`
    ///
    /// `uv` is centred on the screen and scaled by its height.
    #[inline]
    pub fn ray_direction(&self, uv: Vec2) -> Vec3 {
        (self.forward + self.right * uv.x + self.up * uv.y).normalize()
    }

    /// Screen offset for pixel (x, y) on a `width`×`height` screen
    ///
    /// Y grows upwards; (0, 0) is the bottom-left pixel.
    #[inline]
    pub fn screen_uv(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
        let res = Vec2::new(width, height);
        (Vec2::new(x, y) - res * 0.5) / res.y
    }

    /// Contrast-boosted brightness for one pixel
    ///
    /// Unbounded, typically within `[0, 2]`. Callers clamp before display.
    pub fn shade<F>(&self, field: &F, march_settings: &MarchSettings, x: f32, y: f32, width: f32, height: f32) -> f32
    where
        F: SignedDistanceField + ?Sized,
    {
        let uv = Self::screen_uv(x, y, width, height);
        let c = march(field, self.origin, self.ray_direction(uv), march_settings) * self.exposure;
        c * c
    }
}

/// Shade pixel (x, y) of the default scene with the default camera
pub fn shade_pixel(x: f32, y: f32, width: f32, height: f32) -> f32 {
    Camera::default().shade(&zxfx_field::MoonScene, &MarchSettings::default(), x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let cam = Camera::default();
        assert!((cam.forward.length() - 1.0).abs() < EPSILON);
        assert!((cam.right.length() - 1.0).abs() < EPSILON);
        assert!((cam.up.length() - 1.0).abs() < EPSILON);
        assert!(cam.forward.dot(cam.right).abs() < EPSILON);
        assert!(cam.forward.dot(cam.up).abs() < EPSILON);
        assert!(cam.right.dot(cam.up).abs() < EPSILON);
    }

    #[test]
    fn test_default_origin_matches_rotations() {
        let cam = Camera::default();
        let expected = Vec3::new(0.0, 0.2, -4.0).rot_yz(-0.6).rot_xz(1.1);
        assert!(vec_approx_eq(cam.origin, expected));
        // Same distance from the pivot after rotation
        assert!((cam.origin.length() - Vec3::new(0.0, 0.2, -4.0).length()).abs() < EPSILON);
    }

    #[test]
    fn test_looking_at_axis() {
        let cam = Camera::looking_at(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO);
        assert!(vec_approx_eq(cam.forward, Vec3::Z));
        assert!(vec_approx_eq(cam.right, Vec3::X));
        assert!(vec_approx_eq(cam.up, Vec3::Y));
    }

    #[test]
    fn test_centre_ray_is_forward() {
        let cam = Camera::default();
        let uv = Camera::screen_uv(128.0, 96.0, 256.0, 192.0);
        assert_eq!(uv, Vec2::ZERO);
        assert!(vec_approx_eq(cam.ray_direction(uv), cam.forward));
    }

    #[test]
    fn test_screen_uv_scaled_by_height() {
        let uv = Camera::screen_uv(256.0, 192.0, 256.0, 192.0);
        assert!((uv.x - 128.0 / 192.0).abs() < EPSILON);
        assert!((uv.y - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_shade_pixel_finite_non_negative() {
        for (x, y) in [(0.0, 0.0), (128.0, 96.0), (255.0, 191.0), (40.0, 150.0)] {
            let c = shade_pixel(x, y, 256.0, 192.0);
            assert!(c.is_finite(), "({}, {}) -> {}", x, y, c);
            assert!(c >= 0.0);
        }
    }

    #[test]
    fn test_shade_is_deterministic() {
        assert_eq!(shade_pixel(100.0, 60.0, 256.0, 192.0), shade_pixel(100.0, 60.0, 256.0, 192.0));
    }

    #[test]
    fn test_exposure_squares() {
        let flat = |p: Vec3| p.y + 1.0;
        let cam = Camera::looking_at(Vec3::ZERO, -Vec3::Z + Vec3::new(0.0, -1.0, 0.0));
        let s = MarchSettings::default();
        let half = Camera { exposure: 1.0, ..cam }.shade(&flat, &s, 10.0, 10.0, 20.0, 20.0);
        let full = Camera { exposure: 2.0, ..cam }.shade(&flat, &s, 10.0, 10.0, 20.0, 20.0);
        assert!((full - 4.0 * half).abs() < EPSILON);
    }
}

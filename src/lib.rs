//! One Small Step
//!
//! Renders a raymarched lunar landing site in the style of an 8-bit home
//! computer display and exports it as a PNG.

pub mod config;
pub mod export;

use zxfx_plot::{FastRandom, Surface};
use zxfx_render::{Camera, FrameRenderer, FrameStats, MoonScene};

use config::AppConfig;

/// Render the landing site with the configured camera, march settings and seed
pub fn render_frame(config: &AppConfig) -> (Surface, FrameStats) {
    let camera = Camera::from_settings(&config.camera);
    let renderer = FrameRenderer::new(&MoonScene, camera, config.march);
    let mut rng = FastRandom::seeded(config.output.seed);
    renderer.render(&mut rng)
}

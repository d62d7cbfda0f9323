//! Chunky-pixel plotting for a 256×192 attribute display
//!
//! - [`surface::Surface`] - 1-bit bitmap plus 8×8 colour attribute cells
//! - [`attribute::Attribute`] - ink/paper/bright/flash attribute byte
//! - [`rng::RandomSource`] - injected byte source for dithering
//! - [`dither`] - density-based stochastic plotting, single and 4×4 chunky
//!
//! Nothing here holds global state: the surface and the random source are
//! both passed in by the caller.

pub mod attribute;
pub mod dither;
pub mod rng;
pub mod surface;

pub use attribute::{Attribute, Colour};
pub use dither::{density_from_brightness, plot_chunky, plot_chunky_shade, plot_shade, CHUNK_SIZE};
pub use rng::{FastRandom, RandomSource};
pub use surface::{PixelSink, Surface, CELL_COLUMNS, CELL_ROWS, CELL_SIZE, PIXEL_HEIGHT, PIXEL_WIDTH};

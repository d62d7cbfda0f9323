//! Full-frame rendering onto a [`Surface`]
//!
//! The frame is shaded on a grid of 4×4 chunky pixels. Brightness for every
//! chunk is computed up front, rows in parallel, and then dithered in scan
//! order with a single random source so the picture depends only on the seed.
//!
//! Each chunk is also sorted into a brightness band that picks the colour
//! attribute of its 8×8 cell:
//!
//! | band | brightness | attribute |
//! |------|------------|-----------|
//! | Dim | `< 1.0101` | white ink on black |
//! | Bright | `< 2.0202` | bright white ink, brightness scaled by 0.4 |
//! | Hot | the rest | white ink on red paper |
//!
//! Shades are clamped to [`MAX_BRIGHTNESS`] first, so in practice only the
//! first two bands appear.

use rayon::prelude::*;
use zxfx_field::SignedDistanceField;
use zxfx_plot::{
    density_from_brightness, plot_chunky_shade, Attribute, Colour, RandomSource, Surface,
    CELL_SIZE, CHUNK_SIZE, PIXEL_HEIGHT, PIXEL_WIDTH,
};

use crate::camera::Camera;
use crate::march::MarchSettings;

/// Upper bound of the displayed brightness
pub const MAX_BRIGHTNESS: f32 = 2.0;

/// Pixel lines kept free at the bottom of the display for a caption
pub const FOOTER_LINES: u32 = CELL_SIZE;

/// Brightness band of a chunk
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    Dim,
    Bright,
    Hot,
}

impl Band {
    /// Band of a brightness already clamped to `[0, MAX_BRIGHTNESS]`
    pub fn of(brightness: f32) -> Self {
        match (brightness * 0.99).floor() as u8 {
            0 => Band::Dim,
            1 => Band::Bright,
            _ => Band::Hot,
        }
    }

    /// Cell attribute for chunks in this band
    pub fn attribute(self) -> Attribute {
        match self {
            Band::Dim => Attribute::new(Colour::White, Colour::Black),
            Band::Bright => Attribute::new(Colour::White, Colour::Black).with_bright(),
            Band::Hot => Attribute::new(Colour::White, Colour::Red),
        }
    }
}

/// Clamp a raw shade and split it into band and dither density
pub fn classify(shade: f32) -> (Band, u8) {
    let mut c = shade.clamp(0.0, MAX_BRIGHTNESS);
    // NaN survives clamp
    if c.is_nan() {
        c = 0.0;
    }
    let band = Band::of(c);
    if band == Band::Bright {
        c *= 0.4;
    }
    (band, density_from_brightness(c))
}

/// Per-frame counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub chunks: u32,
    pub dim: u32,
    pub bright: u32,
    pub hot: u32,
    pub pixels_set: u32,
}

/// Raw shades for every chunk, row-major, top row first
#[derive(Clone, Debug, PartialEq)]
pub struct ShadeMap {
    columns: u32,
    rows: u32,
    values: Vec<f32>,
}

impl ShadeMap {
    /// Wrap `values`; `None` unless there is exactly one per chunk
    pub fn new(columns: u32, rows: u32, values: Vec<f32>) -> Option<Self> {
        let count = columns.checked_mul(rows)? as usize;
        if values.len() != count {
            return None;
        }
        Some(Self { columns, rows, values })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// All shades, row-major
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Shade of the chunk at (cx, cy)
    pub fn get(&self, cx: u32, cy: u32) -> Option<f32> {
        if cx >= self.columns || cy >= self.rows {
            return None;
        }
        self.values.get((cy * self.columns + cx) as usize).copied()
    }
}

/// A field seen through a camera
pub struct FrameRenderer<'a, F: SignedDistanceField + ?Sized> {
    field: &'a F,
    camera: Camera,
    march: MarchSettings,
}

impl<'a, F: SignedDistanceField + ?Sized> FrameRenderer<'a, F> {
    pub fn new(field: &'a F, camera: Camera, march: MarchSettings) -> Self {
        Self { field, camera, march }
    }

    /// Chunk columns across the display
    pub fn columns(&self) -> u32 {
        PIXEL_WIDTH / CHUNK_SIZE
    }

    /// Chunk rows above the footer
    pub fn rows(&self) -> u32 {
        (PIXEL_HEIGHT - FOOTER_LINES) / CHUNK_SIZE
    }

    /// Raw shade of the chunk at (cx, cy)
    ///
    /// The chunk is sampled at its top-left display pixel, flipped so that
    /// screen y grows upwards.
    pub fn shade_chunk(&self, cx: u32, cy: u32) -> f32 {
        let x = (cx * CHUNK_SIZE) as f32;
        let y = (PIXEL_HEIGHT - 1 - cy * CHUNK_SIZE) as f32;
        self.camera.shade(
            self.field,
            &self.march,
            x,
            y,
            PIXEL_WIDTH as f32,
            PIXEL_HEIGHT as f32,
        )
    }

    /// Shade every chunk, one rayon task per row
    pub fn shade_map(&self) -> ShadeMap {
        let columns = self.columns();
        let rows = self.rows();
        let mut values = vec![0.0; (columns * rows) as usize];
        values
            .par_chunks_mut(columns as usize)
            .enumerate()
            .for_each(|(cy, row)| {
                for (cx, v) in row.iter_mut().enumerate() {
                    *v = self.shade_chunk(cx as u32, cy as u32);
                }
            });
        ShadeMap { columns, rows, values }
    }

    /// Render into `surface`, drawing dither noise from `rng`
    pub fn render_into<R>(&self, surface: &mut Surface, rng: &mut R) -> FrameStats
    where
        R: RandomSource + ?Sized,
    {
        let map = self.shade_map();
        let stats = dither_map(&map, surface, rng);
        log::debug!(
            "Rendered {} chunks ({} dim, {} bright, {} hot), {} pixels set",
            stats.chunks,
            stats.dim,
            stats.bright,
            stats.hot,
            stats.pixels_set
        );
        stats
    }

    /// Render onto a fresh surface
    pub fn render<R>(&self, rng: &mut R) -> (Surface, FrameStats)
    where
        R: RandomSource + ?Sized,
    {
        let mut surface = Surface::new();
        let stats = self.render_into(&mut surface, rng);
        (surface, stats)
    }
}

/// Dither a shade map onto `surface` in scan order
///
/// Each chunk also writes the attribute of its 8×8 cell, so the last chunk
/// drawn in a cell decides its colour.
pub fn dither_map<R>(map: &ShadeMap, surface: &mut Surface, rng: &mut R) -> FrameStats
where
    R: RandomSource + ?Sized,
{
    let mut stats = FrameStats::default();
    for cy in 0..map.rows() {
        for cx in 0..map.columns() {
            let shade = map.get(cx, cy).unwrap_or(0.0);
            let (band, density) = classify(shade);
            plot_chunky_shade(surface, rng, cx, cy, density);

            let (px, py) = (cx * CHUNK_SIZE, cy * CHUNK_SIZE);
            surface.set_attribute(px / CELL_SIZE, py / CELL_SIZE, band.attribute());

            stats.chunks += 1;
            match band {
                Band::Dim => stats.dim += 1,
                Band::Bright => stats.bright += 1,
                Band::Hot => stats.hot += 1,
            }
        }
    }
    stats.pixels_set = surface.count_set();
    stats
}

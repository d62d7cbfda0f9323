//! Monochrome display surface with per-cell colour attributes
//!
//! Pixels are stored one bit each, rows top to bottom, most significant bit
//! leftmost. This is a linear layout, not the interleaved one of the real
//! display memory.

use crate::attribute::Attribute;

/// Display width in pixels
pub const PIXEL_WIDTH: u32 = 256;
/// Display height in pixels
pub const PIXEL_HEIGHT: u32 = 192;
/// Size of an attribute cell in pixels
pub const CELL_SIZE: u32 = 8;
/// Attribute columns
pub const CELL_COLUMNS: u32 = PIXEL_WIDTH / CELL_SIZE;
/// Attribute rows
pub const CELL_ROWS: u32 = PIXEL_HEIGHT / CELL_SIZE;

const BYTES_PER_ROW: usize = (PIXEL_WIDTH / 8) as usize;

/// Something pixels can be plotted onto
///
/// Coordinates outside the sink are ignored.
pub trait PixelSink {
    /// Set the pixel at (x, y)
    fn set_pixel(&mut self, x: u32, y: u32);

    /// Clear every pixel inside the rectangle
    fn clear_region(&mut self, x: u32, y: u32, width: u32, height: u32);
}

/// 256×192 bitmap plus a 32×24 attribute grid
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pixels: Vec<u8>,
    attributes: Vec<Attribute>,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    /// Blank surface with default attributes
    pub fn new() -> Self {
        Self::with_attribute(Attribute::default())
    }

    /// Blank surface with every cell set to `attr`
    pub fn with_attribute(attr: Attribute) -> Self {
        Self {
            pixels: vec![0; BYTES_PER_ROW * PIXEL_HEIGHT as usize],
            attributes: vec![attr; (CELL_COLUMNS * CELL_ROWS) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        PIXEL_WIDTH
    }

    #[inline]
    pub fn height(&self) -> u32 {
        PIXEL_HEIGHT
    }

    #[inline]
    fn bit_index(x: u32, y: u32) -> Option<(usize, u8)> {
        if x >= PIXEL_WIDTH || y >= PIXEL_HEIGHT {
            return None;
        }
        let byte = y as usize * BYTES_PER_ROW + (x / 8) as usize;
        Some((byte, 0x80 >> (x % 8)))
    }

    /// Whether the pixel at (x, y) is set; false outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        Self::bit_index(x, y)
            .map(|(byte, mask)| self.pixels[byte] & mask != 0)
            .unwrap_or(false)
    }

    /// Clear the pixel at (x, y)
    pub fn reset_pixel(&mut self, x: u32, y: u32) {
        if let Some((byte, mask)) = Self::bit_index(x, y) {
            self.pixels[byte] &= !mask;
        }
    }

    /// Clear all pixels; attributes are kept
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Number of set pixels
    pub fn count_set(&self) -> u32 {
        self.pixels.iter().map(|b| b.count_ones()).sum()
    }

    /// Packed bitmap, `PIXEL_WIDTH / 8` bytes per row
    pub fn bitmap(&self) -> &[u8] {
        &self.pixels
    }

    /// Attribute of the cell at column/row `(col, row)`
    pub fn attribute(&self, col: u32, row: u32) -> Option<Attribute> {
        if col >= CELL_COLUMNS || row >= CELL_ROWS {
            return None;
        }
        Some(self.attributes[(row * CELL_COLUMNS + col) as usize])
    }

    /// Set the attribute of the cell at column/row `(col, row)`
    pub fn set_attribute(&mut self, col: u32, row: u32, attr: Attribute) {
        if col < CELL_COLUMNS && row < CELL_ROWS {
            self.attributes[(row * CELL_COLUMNS + col) as usize] = attr;
        }
    }

    /// Attribute of the cell containing pixel (x, y)
    pub fn attribute_at_pixel(&self, x: u32, y: u32) -> Option<Attribute> {
        self.attribute(x / CELL_SIZE, y / CELL_SIZE)
    }

    /// Set every cell to `attr`
    pub fn fill_attributes(&mut self, attr: Attribute) {
        self.attributes.fill(attr);
    }

    /// Expand to 24-bit RGB, row-major, 3 bytes per pixel
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity((PIXEL_WIDTH * PIXEL_HEIGHT * 3) as usize);
        for y in 0..PIXEL_HEIGHT {
            for x in 0..PIXEL_WIDTH {
                let attr = self.attributes[((y / CELL_SIZE) * CELL_COLUMNS + x / CELL_SIZE) as usize];
                out.extend_from_slice(&attr.rgb(self.pixel(x, y)));
            }
        }
        out
    }

    /// Text preview, one character per `scale`×`scale` block of pixels
    ///
    /// Each character reflects how many pixels in its block are set.
    pub fn to_ascii(&self, scale: u32) -> String {
        const RAMP: &[u8] = b" .:-=+*#%@";
        let scale = scale.max(1);
        let cols = PIXEL_WIDTH.div_ceil(scale);
        let rows = PIXEL_HEIGHT.div_ceil(scale);
        let mut out = String::with_capacity(((cols + 1) * rows) as usize);
        for row in 0..rows {
            for col in 0..cols {
                let mut set = 0;
                let mut total = 0;
                for y in row * scale..((row + 1) * scale).min(PIXEL_HEIGHT) {
                    for x in col * scale..((col + 1) * scale).min(PIXEL_WIDTH) {
                        total += 1;
                        if self.pixel(x, y) {
                            set += 1;
                        }
                    }
                }
                let level = set * (RAMP.len() as u32 - 1) / total;
                out.push(RAMP[level as usize] as char);
            }
            out.push('\n');
        }
        out
    }
}

impl PixelSink for Surface {
    #[inline]
    fn set_pixel(&mut self, x: u32, y: u32) {
        if let Some((byte, mask)) = Self::bit_index(x, y) {
            self.pixels[byte] |= mask;
        }
    }

    fn clear_region(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let x_end = x.saturating_add(width).min(PIXEL_WIDTH);
        let y_end = y.saturating_add(height).min(PIXEL_HEIGHT);
        for py in y..y_end {
            for px in x..x_end {
                self.reset_pixel(px, py);
            }
        }
    }
}

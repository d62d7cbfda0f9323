//! PNG export of rendered surfaces

use std::fmt;
use std::io;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use zxfx_plot::{Colour, Surface};

/// Error type for image export
#[derive(Debug)]
pub enum ExportError {
    /// IO error creating the output directory
    Io(io::Error),
    /// Encoding or writing the image failed
    Image(image::ImageError),
    /// Pixel buffer does not match the surface dimensions
    Size { width: u32, height: u32, len: usize },
    /// Scale and border would produce an image above [`MAX_EXPORT_PIXELS`]
    TooLarge { scale: u32, border_width: u32 },
}

/// Largest image `to_image` will allocate, in pixels
pub const MAX_EXPORT_PIXELS: u64 = 1 << 26;

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(err) => write!(f, "Export IO error: {}", err),
            ExportError::Image(err) => write!(f, "Export image error: {}", err),
            ExportError::Size { width, height, len } => {
                write!(f, "Export size error: {} bytes for a {}x{} image", len, width, height)
            }
            ExportError::TooLarge { scale, border_width } => write!(
                f,
                "Export size error: scale {} with border {} exceeds {} pixels",
                scale, border_width, MAX_EXPORT_PIXELS
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(err) => Some(err),
            ExportError::Image(err) => Some(err),
            ExportError::Size { .. } | ExportError::TooLarge { .. } => None,
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        ExportError::Io(err)
    }
}

impl From<image::ImageError> for ExportError {
    fn from(err: image::ImageError) -> Self {
        ExportError::Image(err)
    }
}

/// How a surface is laid out in the exported image
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExportOptions {
    /// Integer enlargement; 0 is treated as 1
    pub scale: u32,
    /// Border colour around the bitmap
    pub border: Colour,
    /// Border width in display pixels
    pub border_width: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            border: Colour::Black,
            border_width: 0,
        }
    }
}

/// Output size for a framed and enlarged bitmap, `None` past the pixel cap
fn scaled_size(width: u32, height: u32, scale: u32, border_width: u32) -> Option<(u32, u32)> {
    let frame = border_width.checked_mul(2)?;
    let w = width.checked_add(frame)?.checked_mul(scale)?;
    let h = height.checked_add(frame)?.checked_mul(scale)?;
    if u64::from(w) * u64::from(h) > MAX_EXPORT_PIXELS {
        return None;
    }
    Some((w, h))
}

/// Convert a surface to an RGB image
///
/// The bitmap is framed by the border and then enlarged with square pixels.
pub fn to_image(surface: &Surface, options: &ExportOptions) -> Result<RgbImage, ExportError> {
    let (width, height) = (surface.width(), surface.height());
    let rgb = surface.to_rgb();
    let len = rgb.len();
    let img = RgbImage::from_raw(width, height, rgb)
        .ok_or(ExportError::Size { width, height, len })?;

    let scale = options.scale.max(1);
    let bw = options.border_width;
    if scale == 1 && bw == 0 {
        return Ok(img);
    }

    let (outer_w, outer_h) = scaled_size(width, height, scale, bw).ok_or(ExportError::TooLarge {
        scale: options.scale,
        border_width: bw,
    })?;

    let border = Rgb(options.border.rgb(false));
    Ok(RgbImage::from_fn(outer_w, outer_h, |x, y| {
        let (x, y) = (x / scale, y / scale);
        if x < bw || y < bw || x >= bw + width || y >= bw + height {
            border
        } else {
            *img.get_pixel(x - bw, y - bw)
        }
    }))
}

/// Write `surface` to `path` as a PNG, creating parent directories as needed
pub fn save_png<P: AsRef<Path>>(surface: &Surface, path: P, options: &ExportOptions) -> Result<(), ExportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let img = to_image(surface, options)?;
    img.save_with_format(path, ImageFormat::Png)?;
    log::info!("Wrote {}x{} image to {}", img.width(), img.height(), path.display());
    Ok(())
}

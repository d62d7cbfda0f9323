//! Stochastic dithering onto a [`PixelSink`]
//!
//! A density of 0..=255 becomes a plot probability of `density / 255`. Over a
//! chunky 4×4 block the coverage approximates the brightness.

use crate::rng::RandomSource;
use crate::surface::PixelSink;

/// Side of a chunky pixel in display pixels
pub const CHUNK_SIZE: u32 = 4;

/// Plot a single pixel with probability `density / 255`
///
/// Density 0 and 255 are decided without drawing from `rng`.
#[inline]
pub fn plot_shade<S, R>(sink: &mut S, rng: &mut R, x: u32, y: u32, density: u8)
where
    S: PixelSink + ?Sized,
    R: RandomSource + ?Sized,
{
    if density == 0 {
        return;
    }

    if density == u8::MAX || rng.next_byte() < density {
        sink.set_pixel(x, y);
    }
}

/// Plot the chunky pixel at coarse coordinates (cx, cy)
///
/// Covers display pixels `cx*4..cx*4+4` by `cy*4..cy*4+4`, dithering each
/// independently with the same density.
pub fn plot_chunky_shade<S, R>(sink: &mut S, rng: &mut R, cx: u32, cy: u32, density: u8)
where
    S: PixelSink + ?Sized,
    R: RandomSource + ?Sized,
{
    if density == 0 {
        return;
    }

    let x = cx * CHUNK_SIZE;
    let y = cy * CHUNK_SIZE;
    for i in 0..CHUNK_SIZE {
        for j in 0..CHUNK_SIZE {
            plot_shade(sink, rng, x + j, y + i, density);
        }
    }
}

/// Plot a solid chunky pixel
pub fn plot_chunky<S: PixelSink + ?Sized>(sink: &mut S, cx: u32, cy: u32) {
    let x = cx * CHUNK_SIZE;
    let y = cy * CHUNK_SIZE;
    for i in 0..CHUNK_SIZE {
        for j in 0..CHUNK_SIZE {
            sink.set_pixel(x + j, y + i);
        }
    }
}

/// Map a brightness to a density, saturating at 255
#[inline]
pub fn density_from_brightness(brightness: f32) -> u8 {
    (brightness * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FastRandom;
    use crate::surface::Surface;

    /// Counts plots at one location
    #[derive(Default)]
    struct CountingSink {
        hits: u32,
    }

    impl PixelSink for CountingSink {
        fn set_pixel(&mut self, _x: u32, _y: u32) {
            self.hits += 1;
        }

        fn clear_region(&mut self, _x: u32, _y: u32, _w: u32, _h: u32) {
            self.hits = 0;
        }
    }

    /// Replays a fixed byte sequence
    struct Sequence(Vec<u8>, usize);

    impl RandomSource for Sequence {
        fn next_byte(&mut self) -> u8 {
            let b = self.0[self.1 % self.0.len()];
            self.1 += 1;
            b
        }
    }

    fn trials(density: u8, n: u32) -> u32 {
        let mut sink = CountingSink::default();
        let mut rng = FastRandom::seeded(0xC0FFEE);
        for _ in 0..n {
            plot_shade(&mut sink, &mut rng, 3, 4, density);
        }
        sink.hits
    }

    #[test]
    fn test_density_zero_never_plots() {
        assert_eq!(trials(0, 1000), 0);
    }

    #[test]
    fn test_density_full_always_plots() {
        assert_eq!(trials(255, 1000), 1000);
    }

    #[test]
    fn test_density_half_plots_about_half() {
        let hits = trials(128, 1000);
        assert!((450..=550).contains(&hits), "hits = {}", hits);
    }

    #[test]
    fn test_extremes_do_not_draw() {
        let mut sink = CountingSink::default();
        let mut rng = Sequence(vec![0], 0);
        plot_shade(&mut sink, &mut rng, 0, 0, 0);
        plot_shade(&mut sink, &mut rng, 0, 0, 255);
        assert_eq!(rng.1, 0);
        assert_eq!(sink.hits, 1);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut sink = CountingSink::default();
        let mut rng = Sequence(vec![100, 99], 0);
        plot_shade(&mut sink, &mut rng, 0, 0, 100);
        assert_eq!(sink.hits, 0);
        plot_shade(&mut sink, &mut rng, 0, 0, 100);
        assert_eq!(sink.hits, 1);
    }

    #[test]
    fn test_chunky_covers_block() {
        let mut s = Surface::new();
        let mut rng = FastRandom::seeded(1);
        plot_chunky_shade(&mut s, &mut rng, 2, 3, 255);
        assert_eq!(s.count_set(), 16);
        for y in 12..16 {
            for x in 8..12 {
                assert!(s.pixel(x, y), "({}, {}) not set", x, y);
            }
        }
        assert!(!s.pixel(7, 12));
        assert!(!s.pixel(12, 12));
    }

    #[test]
    fn test_chunky_zero_is_noop() {
        let mut sink = CountingSink::default();
        let mut rng = Sequence(vec![0], 0);
        plot_chunky_shade(&mut sink, &mut rng, 1, 1, 0);
        assert_eq!(sink.hits, 0);
        assert_eq!(rng.1, 0);
    }

    #[test]
    fn test_chunky_draws_per_pixel() {
        let mut sink = CountingSink::default();
        let mut rng = Sequence(vec![0, 255], 0);
        plot_chunky_shade(&mut sink, &mut rng, 0, 0, 128);
        assert_eq!(rng.1, 16);
        assert_eq!(sink.hits, 8);
    }

    #[test]
    fn test_chunky_is_seed_deterministic() {
        let mut a = Surface::new();
        let mut b = Surface::new();
        let mut ra = FastRandom::seeded(77);
        let mut rb = FastRandom::seeded(77);
        for cx in 0..64 {
            plot_chunky_shade(&mut a, &mut ra, cx, 5, (cx * 4) as u8);
            plot_chunky_shade(&mut b, &mut rb, cx, 5, (cx * 4) as u8);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_solid_chunky() {
        let mut s = Surface::new();
        plot_chunky(&mut s, 0, 0);
        assert_eq!(s.count_set(), 16);
    }

    #[test]
    fn test_density_from_brightness() {
        assert_eq!(density_from_brightness(-1.0), 0);
        assert_eq!(density_from_brightness(0.0), 0);
        assert_eq!(density_from_brightness(0.5), 127);
        assert_eq!(density_from_brightness(1.0), 255);
        assert_eq!(density_from_brightness(3.0), 255);
    }
}

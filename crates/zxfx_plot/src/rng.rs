//! Random sources for dithering
//!
//! Plotting never touches global random state; callers pass a
//! [`RandomSource`] in. A fixed seed gives a fixed dither pattern.

/// Supplier of uniformly distributed bytes
pub trait RandomSource {
    fn next_byte(&mut self) -> u8;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_byte(&mut self) -> u8 {
        (**self).next_byte()
    }
}

/// [`RandomSource`] backed by `fastrand`'s wyrand generator
#[derive(Clone, Debug)]
pub struct FastRandom {
    rng: fastrand::Rng,
}

impl FastRandom {
    /// Deterministic generator for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed) }
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl RandomSource for FastRandom {
    #[inline]
    fn next_byte(&mut self) -> u8 {
        self.rng.u8(..)
    }
}

//! Lightweight 8-bit pseudo-random source.
//!
//! [`Rand8`] is a 16-bit linear congruential generator whose output is the
//! folded sum of its two seed bytes, bit-compatible with the `random8` family
//! found in common LED animation libraries. It is cheap enough to call for
//! every pixel on every frame and carries no global state: each panel owns
//! its own instance.

/// Seed used when no explicit seed is supplied.
pub const DEFAULT_SEED: u16 = 1337;

const MULTIPLIER: u16 = 2053;
const INCREMENT: u16 = 13849;

/// Trait for abstracting the panel's source of randomness.
///
/// Implement this to drive the panel from a hardware RNG or, in tests, from
/// a scripted sequence.
pub trait RandomSource {
    /// Returns a uniformly distributed value in `[0, 255]`.
    fn next_u8(&mut self) -> u8;

    /// Returns a value in `[0, limit)` by scaling [`next_u8`](Self::next_u8).
    ///
    /// Returns 0 when `limit` is 0.
    #[inline]
    fn below(&mut self, limit: u8) -> u8 {
        ((u16::from(self.next_u8()) * u16::from(limit)) >> 8) as u8
    }
}

/// 8-bit pseudo-random generator holding its own 16-bit seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rand8 {
    seed: u16,
}

impl Rand8 {
    /// Creates a generator starting from `seed`.
    #[inline]
    pub const fn new(seed: u16) -> Self {
        Self { seed }
    }

    /// Returns the current seed.
    #[inline]
    pub const fn seed(&self) -> u16 {
        self.seed
    }

    /// Replaces the seed, restarting the sequence.
    #[inline]
    pub fn set_seed(&mut self, seed: u16) {
        self.seed = seed;
    }

    /// Mixes external entropy (e.g. a floating ADC reading) into the seed.
    #[inline]
    pub fn add_entropy(&mut self, entropy: u16) {
        self.seed = self.seed.wrapping_add(entropy);
    }

    #[inline]
    fn step(&mut self) {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
    }
}

impl Default for Rand8 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for Rand8 {
    #[inline]
    fn next_u8(&mut self) -> u8 {
        self.step();
        let [low, high] = self.seed.to_le_bytes();
        low.wrapping_add(high)
    }
}

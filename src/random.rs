//! Fast 8-bit pseudo-random numbers
//!
//! The same 16-bit linear congruential generator `FastLED` uses for
//! `random8()`. It is tiny, allocation-free and deterministic for a given seed,
//! which is all an animation needs.

const RAND16_MULTIPLIER: u16 = 2053;
const RAND16_INCREMENT: u16 = 13849;

/// Default generator seed
pub const DEFAULT_SEED: u16 = 1337;

/// 8-bit random number generator
#[derive(Debug, Clone)]
pub struct Random8 {
    seed: u16,
}

impl Default for Random8 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Random8 {
    /// Create a generator with the given seed
    pub const fn new(seed: u16) -> Self {
        Self { seed }
    }

    /// Current generator state
    pub const fn seed(&self) -> u16 {
        self.seed
    }

    /// Mix extra entropy into the generator state
    pub fn add_entropy(&mut self, entropy: u16) {
        self.seed = self.seed.wrapping_add(entropy);
    }

    /// Next 16-bit value
    pub fn random16(&mut self) -> u16 {
        self.seed = self
            .seed
            .wrapping_mul(RAND16_MULTIPLIER)
            .wrapping_add(RAND16_INCREMENT);
        self.seed
    }

    /// Next 8-bit value
    ///
    /// Folds the high byte into the low byte, which has better distribution
    /// than the low byte alone.
    #[allow(clippy::cast_possible_truncation)]
    pub fn random8(&mut self) -> u8 {
        let value = self.random16();
        (value as u8).wrapping_add((value >> 8) as u8)
    }

    /// Random value in `[0, limit)`; returns 0 when `limit` is 0
    #[allow(clippy::cast_possible_truncation)]
    pub fn random8_below(&mut self, limit: u8) -> u8 {
        let value = u16::from(self.random8());
        ((value * u16::from(limit)) >> 8) as u8
    }

    /// Random value in `[min, limit)`; returns `min` when the range is empty
    pub fn random8_between(&mut self, min: u8, limit: u8) -> u8 {
        if limit <= min {
            return min;
        }
        self.random8_below(limit - min) + min
    }
}

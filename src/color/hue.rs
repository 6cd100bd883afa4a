//! Named points on the 0-255 hue circle, as laid out by `FastLED`'s `HSVHue`.

use crate::random::Random8;

pub const HUE_RED: u8 = 0;
pub const HUE_ORANGE: u8 = 32;
pub const HUE_YELLOW: u8 = 64;
pub const HUE_GREEN: u8 = 96;
pub const HUE_AQUA: u8 = 128;
pub const HUE_BLUE: u8 = 160;
pub const HUE_PURPLE: u8 = 192;
pub const HUE_PINK: u8 = 224;

/// Half-open hue interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueRange {
    pub start: u8,
    pub end: u8,
}

impl HueRange {
    /// Red to orange, the flame palette
    pub const FIRE: Self = Self {
        start: HUE_RED,
        end: HUE_ORANGE,
    };

    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Check if the hue lies inside the range
    pub const fn contains(self, hue: u8) -> bool {
        hue >= self.start && hue < self.end
    }

    /// Draw a random hue from the range
    ///
    /// An empty range always yields `start`.
    pub fn pick(self, rng: &mut Random8) -> u8 {
        rng.random8_between(self.start, self.end)
    }
}

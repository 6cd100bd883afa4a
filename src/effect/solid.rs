//! Solid color fill effect
//!
//! Fills all LEDs with a single color, no animation.

use super::Effect;
use crate::color::Rgb;

/// Solid color effect - fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct SolidColorEffect {
    color: Rgb,
}

impl SolidColorEffect {
    /// Create a new solid color effect
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Effect for SolidColorEffect {
    fn render(&mut self, leds: &mut [Rgb]) {
        for led in leds {
            *led = self.color;
        }
    }
}

//! Fire effect
//!
//! Every pixel pulses through a quadrature wave driven by its own phase
//! accumulator. Each time a pixel's brightness dips into the trough its hue
//! is re-rolled from the flame palette, along with a fresh speed and
//! frequency, so neighbouring pixels drift out of step.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Effect;
use crate::color::{HueRange, Rgb, hsv2rgb, saturated};
use crate::math8::{clamp8, quadwave8};
use crate::random::{DEFAULT_SEED, Random8};

/// Brightness the waveform is clamped to from below
pub const BRIGHTNESS_FLOOR: u8 = 24;
/// Brightness the waveform is clamped to from above
pub const BRIGHTNESS_CEILING: u8 = 248;
/// Brightness at or below which a new hue is drawn
pub const CHANGE_COLOR: u8 = 32;
/// Upper bound (exclusive) for a re-rolled speed
pub const MAX_SPEED: u8 = 24;
/// Upper bound (exclusive) for a re-rolled frequency
pub const MAX_FREQ: u8 = 24;
/// Brightness ceiling of a pixel at rest
pub const MAX_STATIONARY: u8 = BRIGHTNESS_CEILING;

/// Tuning of the fire effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireConfig {
    /// Brightness a pixel starts with before its first step
    pub default_brightness: u8,
    /// Palette hues are drawn from
    pub hue_range: HueRange,
    /// Brightness at or below which the hue changes
    pub change_color: u8,
    pub brightness_floor: u8,
    pub brightness_ceiling: u8,
    /// Initial phase is drawn from `[0, initial_phase_max)`
    pub initial_phase_max: u8,
    /// Speed is drawn from `[1, max_speed)`
    pub max_speed: u8,
    /// Frequency is drawn from `[1, max_freq)`
    pub max_freq: u8,
    /// Seed of the pixel random generator
    pub seed: u16,
}

impl FireConfig {
    pub const DEFAULT: Self = Self {
        default_brightness: MAX_STATIONARY / 2,
        hue_range: HueRange::FIRE,
        change_color: CHANGE_COLOR,
        brightness_floor: BRIGHTNESS_FLOOR,
        brightness_ceiling: BRIGHTNESS_CEILING,
        initial_phase_max: 24,
        max_speed: MAX_SPEED,
        max_freq: MAX_FREQ,
        seed: DEFAULT_SEED,
    };
}

impl Default for FireConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of a color update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorUpdate {
    /// Brightness crossed into the trough; a new hue was drawn
    Changed(u8),
    /// Hue kept, detection re-armed
    Kept,
}

/// Animation state of a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelContext {
    /// Position of the pixel in the frame
    pub index: u8,
    pub brightness: u8,
    /// Hue on the 0-255 circle
    pub color: u8,
    /// Phase accumulator, wraps mod 256
    pub phase: u8,
    pub freq: u8,
    pub speed: u8,
    /// Set on the tick a new hue was drawn, cleared on the next one
    pub toggled_color: bool,
}

impl PixelContext {
    /// Create a pixel with a random phase, speed and frequency
    pub fn new(index: u8, default_brightness: u8, color: u8, rng: &mut Random8) -> Self {
        Self::with_config(index, default_brightness, color, &FireConfig::DEFAULT, rng)
    }

    pub(crate) fn with_config(
        index: u8,
        default_brightness: u8,
        color: u8,
        config: &FireConfig,
        rng: &mut Random8,
    ) -> Self {
        let mut ctx = Self {
            index,
            brightness: default_brightness,
            color: 0,
            phase: rng.random8_below(config.initial_phase_max),
            speed: rng.random8_between(1, config.max_speed),
            freq: rng.random8_between(1, config.max_freq),
            toggled_color: false,
        };
        ctx.set_color(color);
        ctx
    }

    /// Advance the phase and derive brightness from the quadrature wave
    pub fn step_wave(&mut self) {
        self.step_wave_clamped(BRIGHTNESS_FLOOR, BRIGHTNESS_CEILING);
    }

    pub(crate) fn step_wave_clamped(&mut self, floor: u8, ceiling: u8) {
        self.phase = self.phase.wrapping_add(self.speed);
        let wave = quadwave8(self.freq.wrapping_mul(self.phase));
        self.brightness = clamp8(wave, floor, ceiling);
    }

    /// Run the color toggle state machine for this tick
    ///
    /// A hue is drawn at most once per trough: the tick after a change always
    /// clears the toggle.
    pub fn update_color(&mut self, config: &FireConfig, rng: &mut Random8) -> ColorUpdate {
        if self.brightness <= config.change_color && !self.toggled_color {
            let hue = config.hue_range.pick(rng);
            // Bounds stay at their maxima; motion scaling is not wired in.
            self.speed = rng.random8_between(1, config.max_speed);
            self.freq = rng.random8_between(1, config.max_freq);
            self.toggled_color = true;
            self.set_color(hue);
            ColorUpdate::Changed(hue)
        } else {
            self.toggled_color = false;
            ColorUpdate::Kept
        }
    }

    pub fn set_color(&mut self, color: u8) {
        self.color = color;
    }

    /// Color of the pixel at its current brightness
    pub fn rgb(&self) -> Rgb {
        hsv2rgb(saturated(self.color, self.brightness))
    }
}

/// Fire effect over `N` pixels
#[derive(Debug, Clone)]
pub struct FireEffect<const N: usize> {
    config: FireConfig,
    rng: Random8,
    pixels: [PixelContext; N],
}

impl<const N: usize> FireEffect<N> {
    pub fn new(config: FireConfig) -> Self {
        let mut effect = Self {
            config,
            rng: Random8::new(config.seed),
            pixels: [PixelContext::default(); N],
        };
        effect.seed_pixels();
        effect
    }

    pub const fn config(&self) -> &FireConfig {
        &self.config
    }

    pub fn pixels(&self) -> &[PixelContext] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [PixelContext] {
        &mut self.pixels
    }

    #[allow(clippy::cast_possible_truncation)]
    fn seed_pixels(&mut self) {
        for (index, pixel) in self.pixels.iter_mut().enumerate() {
            let hue = self.config.hue_range.pick(&mut self.rng);
            *pixel = PixelContext::with_config(
                index as u8,
                self.config.default_brightness,
                hue,
                &self.config,
                &mut self.rng,
            );
        }
    }
}

impl<const N: usize> Effect for FireEffect<N> {
    fn render(&mut self, leds: &mut [Rgb]) {
        for pixel in &mut self.pixels {
            pixel.step_wave_clamped(self.config.brightness_floor, self.config.brightness_ceiling);
            if let ColorUpdate::Changed(_hue) = pixel.update_color(&self.config, &mut self.rng) {
                #[cfg(feature = "esp32-log")]
                println!("[FireEffect] pixel {} hue -> {}", pixel.index, _hue);
            }

            if let Some(led) = leds.get_mut(usize::from(pixel.index)) {
                *led = pixel.rgb();
            }
        }
    }

    fn reset(&mut self) {
        self.seed_pixels();
    }
}

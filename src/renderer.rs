#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Rgb, scale_frame};
use crate::effect::{EffectId, EffectSlot, FireConfig, Mode};

/// Configuration for the renderer
#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    /// Effect to start with
    pub mode: Mode,
    /// Fire effect tuning
    pub fire: FireConfig,
    /// Master brightness applied to every frame
    pub brightness: u8,
}

impl RendererConfig {
    pub const DEFAULT: Self = Self {
        mode: Mode::Fire,
        fire: FireConfig::DEFAULT,
        brightness: 255,
    };
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Renders one frame per tick into a fixed buffer of `N` pixels
pub struct Renderer<const N: usize> {
    fire: FireConfig,
    mode: Mode,
    brightness: u8,
    effect: EffectSlot<N>,
    frame_buffer: [Rgb; N],
}

impl<const N: usize> Renderer<N> {
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            fire: config.fire,
            mode: config.mode,
            brightness: config.brightness,
            effect: EffectSlot::from_mode(config.mode, config.fire),
            frame_buffer: [Rgb::default(); N],
        }
    }

    /// Produce the next frame
    pub fn render(&mut self) -> &[Rgb] {
        self.effect.render(&mut self.frame_buffer);
        scale_frame(&mut self.frame_buffer, self.brightness);
        &self.frame_buffer
    }

    /// Switch to another effect
    ///
    /// Entering the fire effect always starts from freshly seeded pixels.
    pub fn set_mode(&mut self, mode: Mode) {
        #[cfg(feature = "esp32-log")]
        println!("[Renderer] mode {:?} -> {:?}", self.mode, mode);
        if mode == self.mode {
            self.effect.reset();
        } else {
            self.mode = mode;
            self.effect = EffectSlot::from_mode(mode, self.fire);
        }
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub fn effect_id(&self) -> EffectId {
        self.effect.id()
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn effect(&self) -> &EffectSlot<N> {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut EffectSlot<N> {
        &mut self.effect
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }
}

//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod fire;
mod solid;

pub use fire::{
    BRIGHTNESS_CEILING, BRIGHTNESS_FLOOR, CHANGE_COLOR, ColorUpdate, FireConfig, FireEffect,
    MAX_FREQ, MAX_SPEED, MAX_STATIONARY, PixelContext,
};
pub use solid::SolidColorEffect;

use crate::color::Rgb;

const EFFECT_NAME_SOLID: &str = "solid";
const EFFECT_NAME_FIRE: &str = "fire";

const EFFECT_ID_SOLID: u8 = 0;
const EFFECT_ID_FIRE: u8 = 1;

pub trait Effect {
    /// Render a single frame
    ///
    /// Called once per tick; animated effects advance their state here.
    fn render(&mut self, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Which effect the renderer should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Every pixel painted with one color
    Solid(Rgb),
    /// Quadrature-wave fire animation
    #[default]
    Fire,
}

impl Mode {
    pub const fn id(self) -> EffectId {
        match self {
            Self::Solid(_) => EffectId::Solid,
            Self::Fire => EffectId::Fire,
        }
    }
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Solid = EFFECT_ID_SOLID,
    Fire = EFFECT_ID_FIRE,
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_SOLID => Self::Solid,
            EFFECT_ID_FIRE => Self::Fire,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => EFFECT_NAME_SOLID,
            Self::Fire => EFFECT_NAME_FIRE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_SOLID => Some(Self::Solid),
            EFFECT_NAME_FIRE => Some(Self::Fire),
            _ => None,
        }
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot<const N: usize> {
    Solid(SolidColorEffect),
    Fire(FireEffect<N>),
}

impl<const N: usize> EffectSlot<N> {
    /// Build the slot for a mode
    pub fn from_mode(mode: Mode, fire: FireConfig) -> Self {
        match mode {
            Mode::Solid(color) => Self::Solid(SolidColorEffect::new(color)),
            Mode::Fire => Self::Fire(FireEffect::new(fire)),
        }
    }

    /// Render the current effect
    pub fn render(&mut self, leds: &mut [Rgb]) {
        match self {
            Self::Solid(effect) => effect.render(leds),
            Self::Fire(effect) => effect.render(leds),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Solid(effect) => Effect::reset(effect),
            Self::Fire(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Solid(_) => EffectId::Solid,
            Self::Fire(_) => EffectId::Fire,
        }
    }

    /// Pixel contexts of the fire effect, if it is running
    pub fn fire(&self) -> Option<&FireEffect<N>> {
        match self {
            Self::Fire(effect) => Some(effect),
            Self::Solid(_) => None,
        }
    }

    pub fn fire_mut(&mut self) -> Option<&mut FireEffect<N>> {
        match self {
            Self::Fire(effect) => Some(effect),
            Self::Solid(_) => None,
        }
    }
}

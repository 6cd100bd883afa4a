#![no_std]

pub mod color;
pub mod control;
pub mod device;
pub mod effect;
pub mod error;
pub mod frame_scheduler;
pub mod math8;
pub mod motion;
pub mod output;
pub mod random;
pub mod renderer;

pub use control::{ControlChannel, ControlIntent, ControlReceiver, ControlSender, PendingControl};
pub use device::{Device, DeviceState, TickOutcome};
pub use effect::{EffectId, EffectSlot, FireConfig, Mode, PixelContext};
pub use error::{FaultKind, SensorError};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use motion::{AccelRange, MotionEstimator, MotionSource, MovingAverage, NoMotion};
pub use output::SmartLedsOutput;
pub use random::Random8;
pub use renderer::{Renderer, RendererConfig};

pub use color::{Hsv, Rgb};
pub use math8::quadwave8;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// `write` receives the whole frame and is expected to latch it.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

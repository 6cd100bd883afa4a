//! Device state machine
//!
//! Ties the frame scheduler, the control channel and the (optional) motion
//! source together. The device renders while `Running`; any fault moves it to
//! `Fault`, which is terminal: from then on every tick is a no-op and the
//! caller is expected to idle (feed the watchdog, yield) forever.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use embassy_time::Instant;

use crate::OutputDriver;
use crate::control::ControlReceiver;
use crate::error::FaultKind;
use crate::frame_scheduler::{FrameResult, FrameScheduler};
use crate::motion::{MotionSource, NoMotion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    Running,
    Fault(FaultKind),
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A frame was rendered and pushed to the output
    Frame(FrameResult),
    /// The device is faulted; nothing was written
    Halted(FaultKind),
}

pub struct Device<'a, O: OutputDriver, M: MotionSource, const N: usize, const C: usize> {
    scheduler: FrameScheduler<O, N>,
    control: ControlReceiver<'a, C>,
    motion: M,
    magnitude: f32,
    state: DeviceState,
}

impl<'a, O: OutputDriver, const N: usize, const C: usize> Device<'a, O, NoMotion, N, C> {
    /// Device without an accelerometer
    pub fn new(scheduler: FrameScheduler<O, N>, control: ControlReceiver<'a, C>) -> Self {
        Self::with_motion(scheduler, control, NoMotion)
    }
}

impl<'a, O: OutputDriver, M: MotionSource, const N: usize, const C: usize> Device<'a, O, M, N, C> {
    /// Device with a motion source
    ///
    /// The source is probed once; if it does not answer the device starts
    /// out faulted.
    pub fn with_motion(
        scheduler: FrameScheduler<O, N>,
        control: ControlReceiver<'a, C>,
        mut motion: M,
    ) -> Self {
        let state = match motion.probe() {
            Ok(()) => DeviceState::Running,
            Err(error) => {
                #[cfg(feature = "esp32-log")]
                println!("[Device] accelerometer not found: {:?}", error.kind);
                DeviceState::Fault(FaultKind::SensorNotFound(error.kind))
            }
        };

        Self {
            scheduler,
            control,
            motion,
            magnitude: 0.0,
            state,
        }
    }

    /// Run one iteration of the control loop
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if let DeviceState::Fault(kind) = self.state {
            return TickOutcome::Halted(kind);
        }

        let pending = self.control.drain();
        if pending.halt {
            self.fault(FaultKind::Halted);
            return TickOutcome::Halted(FaultKind::Halted);
        }
        let renderer = self.scheduler.renderer_mut();
        if let Some(mode) = pending.mode {
            renderer.set_mode(mode);
        }
        if let Some(brightness) = pending.brightness {
            renderer.set_brightness(brightness);
        }

        match self.motion.sample() {
            Ok(magnitude) => self.magnitude = magnitude,
            Err(_error) => {
                #[cfg(feature = "esp32-log")]
                println!("[Device] accelerometer read failed: {:?}", _error.kind);
            }
        }

        TickOutcome::Frame(self.scheduler.tick(now))
    }

    /// Enter the fault state
    ///
    /// The first fault sticks; later ones are ignored.
    pub fn fault(&mut self, kind: FaultKind) {
        if self.state != DeviceState::Running {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!("[Device] fault: {:?}", kind);
        self.state = DeviceState::Fault(kind);
    }

    pub const fn state(&self) -> DeviceState {
        self.state
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.state, DeviceState::Running)
    }

    /// Last smoothed motion magnitude (0.0-1.0)
    pub const fn magnitude(&self) -> f32 {
        self.magnitude
    }

    pub fn scheduler(&self) -> &FrameScheduler<O, N> {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut FrameScheduler<O, N> {
        &mut self.scheduler
    }

    pub fn motion(&self) -> &M {
        &self.motion
    }
}

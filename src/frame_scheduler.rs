//! Frame pacing
//!
//! Keeps ticks on a fixed cadence without owning a timer: the caller passes
//! the current time in and sleeps for whatever the scheduler hands back.

use embassy_time::{Duration, Instant};

use crate::{OutputDriver, Renderer};

/// Default target frame rate (10 FPS).
pub const DEFAULT_FPS: u32 = 10;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Renders frames into an output driver at a fixed cadence.
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     delay_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver, const N: usize> {
    output: O,
    renderer: Renderer<N>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<O: OutputDriver, const N: usize> FrameScheduler<O, N> {
    /// Create a new frame scheduler running at `DEFAULT_FPS`.
    pub fn new(renderer: Renderer<N>, driver: O) -> Self {
        Self::with_frame_duration(renderer, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(renderer: Renderer<N>, driver: O, frame_duration: Duration) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Render one frame, push it to the output and return the next deadline.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Fell more than two frames behind: skip the backlog instead of bursting
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        let frame = self.renderer.render();
        self.output.write(frame);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub fn renderer(&self) -> &Renderer<N> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<N> {
        &mut self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

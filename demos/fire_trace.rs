//! Host-side trace of the fire animation
//!
//! Runs the single-pixel device for a few seconds of simulated time and prints
//! one line per tick: brightness, hue and the RGB value pushed to the strip.

#![allow(clippy::print_stdout)]

use dress_light::{
    ControlChannel, Device, FrameScheduler, Instant, OutputDriver, Renderer, RendererConfig, Rgb,
    TickOutcome,
};

const TICKS: u64 = 64;

/// Keeps the last latched frame of a one-pixel strip
#[derive(Default)]
struct ConsoleDriver {
    latched: Rgb,
}

impl OutputDriver for ConsoleDriver {
    fn write(&mut self, colors: &[Rgb]) {
        if let Some(color) = colors.first() {
            self.latched = *color;
        }
    }
}

static CONTROL: ControlChannel<4> = ControlChannel::new();

fn main() {
    let renderer = Renderer::<1>::new(&RendererConfig::DEFAULT);
    let scheduler = FrameScheduler::new(renderer, ConsoleDriver::default());
    let mut device = Device::new(scheduler, CONTROL.receiver());

    let mut now = Instant::from_millis(0);
    for tick in 0..TICKS {
        if tick == TICKS - 1 {
            let _ = CONTROL.sender().halt();
        }

        match device.tick(now) {
            TickOutcome::Frame(result) => now = result.next_deadline,
            TickOutcome::Halted(kind) => {
                println!("halted: {kind:?}");
                break;
            }
        }

        let scheduler = device.scheduler();
        let color = scheduler.output().latched;
        if let Some(ctx) = scheduler.renderer().effect().fire().map(|fire| fire.pixels()[0]) {
            println!(
                "tick {tick:3} brightness={:3} hue={:2} rgb=#{:02x}{:02x}{:02x}",
                ctx.brightness, ctx.color, color.r, color.g, color.b
            );
        }
    }
}

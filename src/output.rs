//! Output drivers
//!
//! [`OutputDriver`](crate::OutputDriver) adapters for real LED hardware.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::Rgb;

/// Drives any `smart-leds` compatible strip (WS2812 over SPI/RMT/PIO, ...)
///
/// A failed write drops the frame; the next tick simply tries again.
pub struct SmartLedsOutput<W> {
    writer: W,
    failed_writes: u32,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            failed_writes: 0,
        }
    }

    /// Number of frames the driver refused
    pub const fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    pub fn release(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) {
        if self.writer.write(colors.iter().copied()).is_err() {
            self.failed_writes = self.failed_writes.wrapping_add(1);
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput] write failed ({} total)", self.failed_writes);
        }
    }
}

//! Motion magnitude estimation
//!
//! Turns raw accelerometer readings into a smoothed 0.0-1.0 "how much is the
//! wearer moving" figure: the mean absolute x/z acceleration relative to the
//! sensor's full scale, averaged over the last few samples.

use accelerometer::Accelerometer;
#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::error::SensorError;

/// Number of samples in the moving average
pub const AVERAGE_WINDOW: usize = 5;

/// Measurement range of the accelerometer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccelRange {
    #[default]
    G2,
    G4,
    G8,
    G16,
}

impl AccelRange {
    /// Full-scale reading in g
    pub const fn full_scale(self) -> f32 {
        match self {
            Self::G2 => 2.0,
            Self::G4 => 4.0,
            Self::G8 => 8.0,
            Self::G16 => 16.0,
        }
    }
}

/// Fixed-size ring buffer averaging the most recent samples
///
/// Slots start at zero, so the mean is pulled towards zero until the window
/// has been filled once.
#[derive(Debug, Clone)]
pub struct MovingAverage<const N: usize> {
    readings: [f32; N],
    cursor: usize,
}

impl<const N: usize> Default for MovingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MovingAverage<N> {
    pub const fn new() -> Self {
        Self {
            readings: [0.0; N],
            cursor: 0,
        }
    }

    /// Overwrite the oldest slot with a new sample
    pub fn push(&mut self, sample: f32) {
        if N == 0 {
            return;
        }
        self.readings[self.cursor] = sample;
        self.cursor += 1;
        if self.cursor >= N {
            self.cursor = 0;
        }
    }

    /// Mean over the whole window
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f32 {
        if N == 0 {
            return 0.0;
        }
        self.readings.iter().sum::<f32>() / N as f32
    }

    /// Slot the next sample will be written to
    pub const fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Smoothed motion magnitude from an accelerometer
pub struct MotionEstimator<A: Accelerometer> {
    sensor: A,
    range: AccelRange,
    average: MovingAverage<AVERAGE_WINDOW>,
}

impl<A: Accelerometer> MotionEstimator<A> {
    pub const fn new(sensor: A, range: AccelRange) -> Self {
        Self {
            sensor,
            range,
            average: MovingAverage::new(),
        }
    }

    /// Check that the sensor answers
    pub fn probe(&mut self) -> Result<(), SensorError> {
        self.sensor.sample_rate()?;
        Ok(())
    }

    /// Read one sample and return the updated moving average
    pub fn sample(&mut self) -> Result<f32, SensorError> {
        let reading = self.sensor.accel_norm()?;
        let full_scale = self.range.full_scale();
        let x = libm::fabsf(reading.x / full_scale);
        let z = libm::fabsf(reading.z / full_scale);
        self.average.push((x + z) / 2.0);

        let mean = self.average.average();
        #[cfg(feature = "esp32-log")]
        println!("[MotionEstimator] x={} z={} avg={}", reading.x, reading.z, mean);
        Ok(mean)
    }

    /// Current average without taking a new sample
    pub fn magnitude(&self) -> f32 {
        self.average.average()
    }

    pub const fn range(&self) -> AccelRange {
        self.range
    }

    /// Give the sensor back
    pub fn release(self) -> A {
        self.sensor
    }
}

/// Anything that can report a motion magnitude once per tick
pub trait MotionSource {
    /// Check that the source is present and answering
    fn probe(&mut self) -> Result<(), SensorError>;

    /// Take a sample and return the smoothed magnitude
    fn sample(&mut self) -> Result<f32, SensorError>;
}

impl<A: Accelerometer> MotionSource for MotionEstimator<A> {
    fn probe(&mut self) -> Result<(), SensorError> {
        MotionEstimator::probe(self)
    }

    fn sample(&mut self) -> Result<f32, SensorError> {
        MotionEstimator::sample(self)
    }
}

/// No accelerometer fitted; the magnitude stays at zero
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMotion;

impl MotionSource for NoMotion {
    fn probe(&mut self) -> Result<(), SensorError> {
        Ok(())
    }

    fn sample(&mut self) -> Result<f32, SensorError> {
        Ok(0.0)
    }
}

use accelerometer::ErrorKind;

/// A failed accelerometer access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorError {
    pub kind: ErrorKind,
}

impl<E: core::fmt::Debug> From<accelerometer::Error<E>> for SensorError {
    fn from(error: accelerometer::Error<E>) -> Self {
        Self { kind: error.kind() }
    }
}

/// Reason the device stopped rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// Accelerometer did not answer during bring-up
    SensorNotFound(ErrorKind),
    /// Halt requested over the control channel
    Halted,
}

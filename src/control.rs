//! Control channel
//!
//! Lets another execution context (an interrupt handler, a button task) steer
//! the device between ticks. Intents are queued in a bounded `heapless::Deque`
//! guarded by `critical-section`, and drained in one go at the start of the
//! next tick.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::effect::Mode;

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Request to change what the device does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIntent {
    /// Switch to another effect
    SetMode(Mode),
    /// Change the master brightness
    SetBrightness(u8),
    /// Stop rendering for good
    Halt,
}

/// Intents collapsed into what the next tick has to apply
///
/// Later intents win over earlier ones of the same kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingControl {
    pub mode: Option<Mode>,
    pub brightness: Option<u8>,
    pub halt: bool,
}

impl PendingControl {
    /// Check if anything needs to be applied
    pub const fn is_empty(&self) -> bool {
        self.mode.is_none() && self.brightness.is_none() && !self.halt
    }

    fn merge(&mut self, intent: ControlIntent) {
        match intent {
            ControlIntent::SetMode(mode) => self.mode = Some(mode),
            ControlIntent::SetBrightness(brightness) => self.brightness = Some(brightness),
            ControlIntent::Halt => self.halt = true,
        }
    }
}

/// A bounded, interrupt-safe queue of control intents.
pub struct ControlChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ControlIntent, SIZE>>>,
}

impl<const SIZE: usize> ControlChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    pub const fn sender(&self) -> ControlSender<'_, SIZE> {
        ControlSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> ControlReceiver<'_, SIZE> {
        ControlReceiver { channel: self }
    }

    /// Queue an intent.
    ///
    /// Returns `Err(TrySendError(intent))` if the channel is full.
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), TrySendError<ControlIntent>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(intent).map_err(TrySendError)
        })
    }

    /// Take the oldest queued intent.
    pub fn try_receive(&self) -> Result<ControlIntent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for ControlChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`ControlChannel`].
#[derive(Clone, Copy)]
pub struct ControlSender<'a, const SIZE: usize> {
    channel: &'a ControlChannel<SIZE>,
}

impl<const SIZE: usize> ControlSender<'_, SIZE> {
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), TrySendError<ControlIntent>> {
        self.channel.try_send(intent)
    }

    pub fn set_mode(&self, mode: Mode) -> Result<(), TrySendError<ControlIntent>> {
        self.try_send(ControlIntent::SetMode(mode))
    }

    pub fn set_brightness(&self, brightness: u8) -> Result<(), TrySendError<ControlIntent>> {
        self.try_send(ControlIntent::SetBrightness(brightness))
    }

    pub fn halt(&self) -> Result<(), TrySendError<ControlIntent>> {
        self.try_send(ControlIntent::Halt)
    }
}

/// A receiver handle for a [`ControlChannel`].
#[derive(Clone, Copy)]
pub struct ControlReceiver<'a, const SIZE: usize> {
    channel: &'a ControlChannel<SIZE>,
}

impl<const SIZE: usize> ControlReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<ControlIntent, TryReceiveError> {
        self.channel.try_receive()
    }

    /// Drain every queued intent (non-blocking)
    pub fn drain(&self) -> PendingControl {
        let mut pending = PendingControl::default();
        while let Ok(intent) = self.try_receive() {
            pending.merge(intent);
        }
        pending
    }
}

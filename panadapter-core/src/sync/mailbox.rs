//! Single-slot, latest-wins mailbox
//!
//! Bridges one interrupt producer and one foreground consumer. This is a
//! mailbox, not a queue: a new value unconditionally replaces an
//! unconsumed predecessor, so the consumer sees at most one frame of
//! staleness and older frames are silently dropped under overload.

use core::cell::RefCell;

use critical_section::Mutex;

/// Latest-wins handoff cell between an interrupt and the foreground.
///
/// Both sides update the slot inside a critical section, so the exchange
/// is a bounded copy with interrupts masked and neither side ever blocks.
pub struct FrameMailbox<T> {
    slot: Mutex<RefCell<Option<T>>>,
}

impl<T> FrameMailbox<T> {
    /// Create an empty mailbox
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(RefCell::new(None)),
        }
    }

    /// Publish a value from producer context.
    ///
    /// Replaces any unconsumed previous value. Returns `true` when a
    /// value was displaced; that is a drop statistic only, never a
    /// backpressure signal.
    pub fn publish(&self, value: T) -> bool {
        critical_section::with(|cs| self.slot.borrow(cs).replace(Some(value)).is_some())
    }

    /// Consume the stored value from the foreground.
    ///
    /// `None` is the normal empty-poll result, not an error.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.slot.borrow(cs).take())
    }

    /// Whether an unconsumed value is waiting
    pub fn is_ready(&self) -> bool {
        critical_section::with(|cs| self.slot.borrow(cs).borrow().is_some())
    }
}

impl<T> Default for FrameMailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

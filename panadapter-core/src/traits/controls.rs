//! Mode switch and tuning encoder traits

/// A multi-position mode switch, polled by the foreground loop.
pub trait ModeSwitch {
    /// Read the current switch position. Synchronous, never blocks.
    fn current_position(&mut self) -> i16;

    /// Mode-change handler, dispatched only when the polled position
    /// differs from the previously observed one.
    fn apply(&mut self, position: i16);
}

/// A rotary tuning encoder, polled unconditionally every loop iteration.
pub trait TuningEncoder {
    /// Poll the encoder and dispatch its handler.
    ///
    /// Implementations must be idempotent when the encoder has not
    /// moved since the previous call.
    fn service(&mut self);
}

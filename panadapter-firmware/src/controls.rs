//! Front panel controls
//!
//! GPIO implementations of the core's switch and encoder traits. The
//! demodulator and synthesizer subsystems hang off the dispatch points;
//! this build logs the dispatches and keeps the tuning state.

use defmt::*;
use embassy_rp::gpio::Input;

use panadapter_core::traits::{ModeSwitch, TuningEncoder};

/// Two-pin, four-position rotary mode switch
pub struct GpioModeSwitch {
    label: &'static str,
    pin_a: Input<'static>,
    pin_b: Input<'static>,
}

impl GpioModeSwitch {
    pub fn new(label: &'static str, pin_a: Input<'static>, pin_b: Input<'static>) -> Self {
        Self { label, pin_a, pin_b }
    }
}

impl ModeSwitch for GpioModeSwitch {
    fn current_position(&mut self) -> i16 {
        (self.pin_a.is_high() as i16) | ((self.pin_b.is_high() as i16) << 1)
    }

    fn apply(&mut self, position: i16) {
        info!("{} switch moved to position {}", self.label, position);
    }
}

/// Polled two-pin quadrature encoder driving a stored tuning value.
///
/// `service` is idempotent while the pin state is unchanged; each valid
/// Gray-code transition steps the frequency by `step_hz`.
pub struct QuadratureEncoder {
    label: &'static str,
    pin_a: Input<'static>,
    pin_b: Input<'static>,
    last_state: u8,
    step_hz: i32,
    frequency_hz: i32,
}

impl QuadratureEncoder {
    pub fn new(
        label: &'static str,
        pin_a: Input<'static>,
        pin_b: Input<'static>,
        step_hz: i32,
        initial_hz: i32,
    ) -> Self {
        let mut encoder = Self {
            label,
            pin_a,
            pin_b,
            last_state: 0,
            step_hz,
            frequency_hz: initial_hz,
        };
        // Prime the state so power-on position is not read as movement
        encoder.last_state = encoder.state();
        encoder
    }

    /// The currently tuned frequency in Hz
    pub fn frequency_hz(&self) -> i32 {
        self.frequency_hz
    }

    fn state(&self) -> u8 {
        (self.pin_a.is_high() as u8) | ((self.pin_b.is_high() as u8) << 1)
    }

    /// One step per valid Gray-code transition; bounce lands on 0
    fn step(previous: u8, current: u8) -> i32 {
        match (previous, current) {
            (0b00, 0b01) | (0b01, 0b11) | (0b11, 0b10) | (0b10, 0b00) => 1,
            (0b01, 0b00) | (0b11, 0b01) | (0b10, 0b11) | (0b00, 0b10) => -1,
            _ => 0,
        }
    }
}

impl TuningEncoder for QuadratureEncoder {
    fn service(&mut self) {
        let current = self.state();
        if current == self.last_state {
            return;
        }

        let delta = Self::step(self.last_state, current);
        self.last_state = current;

        if delta != 0 {
            self.frequency_hz += delta * self.step_hz;
            debug!("{} tuned to {} Hz", self.label, self.frequency_hz);
        }
    }
}

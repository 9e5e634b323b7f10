//! Hardware abstraction traits
//!
//! These traits define the interface between the control loop and the
//! board-specific peripherals. Every operation is synchronous and
//! non-blocking relative to the loop's timing budget, and none can fail
//! in an observable way — a misbehaving device is outside this core.

pub mod controls;
pub mod display;
pub mod link;

pub use controls::{ModeSwitch, TuningEncoder};
pub use display::{PanelDisplay, STATUS_ROW, TELEMETRY_ROW};
pub use link::TelemetryIndicator;

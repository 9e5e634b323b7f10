//! Telemetry receive buffering
//!
//! The serial link delivers one decoded telemetry byte per interrupt;
//! [`TelemetryFramer`] accumulates them into a bounded sliding window
//! the foreground can read as a consistent string at any time.

mod framer;

pub use framer::{OverflowPolicy, TelemetryFramer};

/// Displayable bytes held by the telemetry window.
///
/// Matches the 38-character telemetry row on the panel.
pub const TELEMETRY_CAPACITY: usize = 38;

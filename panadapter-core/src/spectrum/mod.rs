//! Spectrum frame types and display formatting
//!
//! The capture subsystem delivers one [`MagnitudeFrame`] per audio block;
//! [`format_trace`] turns it into the byte trace the display draws.

mod formatter;
mod frame;

pub use formatter::{compress, format_trace};
pub use frame::{DisplayFrame, MagnitudeFrame};

/// Number of frequency-domain magnitude bins per capture.
pub const SPECTRUM_BINS: usize = 128;

/// Bytes per display trace: a compressed and an interpolated value per bin.
pub const TRACE_LEN: usize = 2 * SPECTRUM_BINS;

/// Display height budget; compressed values never exceed this.
pub const TRACE_CEILING: u8 = 64;

/// Log-compression gain matching the display resolution.
pub const LOG_GAIN: f32 = 6.0;

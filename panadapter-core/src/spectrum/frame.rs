//! Magnitude and display frame types

use super::{SPECTRUM_BINS, TRACE_LEN};

/// One spectrum capture: 128 non-negative frequency-domain magnitudes.
///
/// Produced atomically by the capture subsystem and read-only once
/// published into the frame mailbox.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagnitudeFrame {
    bins: [f32; SPECTRUM_BINS],
}

impl MagnitudeFrame {
    /// Create a frame from raw magnitude bins
    pub const fn new(bins: [f32; SPECTRUM_BINS]) -> Self {
        Self { bins }
    }

    /// A frame with every bin at zero (no signal)
    pub const fn silent() -> Self {
        Self {
            bins: [0.0; SPECTRUM_BINS],
        }
    }

    /// Access the raw magnitude bins
    pub fn bins(&self) -> &[f32; SPECTRUM_BINS] {
        &self.bins
    }
}

impl Default for MagnitudeFrame {
    fn default() -> Self {
        Self::silent()
    }
}

/// One fully formatted display trace: 256 bytes, two per bin.
///
/// Even indices hold the compressed bin value, odd indices the
/// interpolated value between neighbors. Always fully computed before
/// being handed to the display driver, never partially written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFrame {
    bytes: [u8; TRACE_LEN],
}

impl DisplayFrame {
    /// Create a trace from pre-formatted bytes
    pub const fn new(bytes: [u8; TRACE_LEN]) -> Self {
        Self { bytes }
    }

    /// An all-zero (flat) trace
    pub const fn blank() -> Self {
        Self {
            bytes: [0; TRACE_LEN],
        }
    }

    /// The raw trace bytes, ready for the display driver
    pub fn as_bytes(&self) -> &[u8; TRACE_LEN] {
        &self.bytes
    }

    /// Compressed and interpolated values for one bin
    pub fn column(&self, bin: usize) -> (u8, u8) {
        (self.bytes[2 * bin], self.bytes[2 * bin + 1])
    }
}

impl Default for DisplayFrame {
    fn default() -> Self {
        Self::blank()
    }
}

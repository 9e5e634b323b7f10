//! Log-compression and trace formatting
//!
//! Pure, stateless transform from magnitude bins to display bytes.
//! There are no error conditions: out-of-range magnitudes are zeroed
//! before the log rather than rejected.

use micromath::F32Ext;

use super::{DisplayFrame, MagnitudeFrame, LOG_GAIN, SPECTRUM_BINS, TRACE_CEILING, TRACE_LEN};

/// Compress one magnitude to a display-height byte.
///
/// `clamp(floor(6 * ln(m + 1)), 0, 64)`. The `+ 1` keeps zero magnitude
/// out of the log singularity; negative and non-finite inputs are treated
/// as zero magnitude.
pub fn compress(magnitude: f32) -> u8 {
    let m = if magnitude.is_finite() && magnitude > 0.0 {
        magnitude
    } else {
        0.0
    };

    let height = (LOG_GAIN * (m + 1.0).ln()).floor();
    // ln(m + 1) >= 0, so only the ceiling needs clamping
    if height >= TRACE_CEILING as f32 {
        TRACE_CEILING
    } else {
        height as u8
    }
}

/// Format a magnitude frame into a display trace.
///
/// Each bin contributes two bytes: its compressed value and the floored
/// average with its right neighbor (a two-tap smoothing filter). The
/// final bin has no right neighbor; it pairs with itself, keeping the
/// edge flat instead of reading past the bins.
pub fn format_trace(frame: &MagnitudeFrame) -> DisplayFrame {
    let mut compressed = [0u8; SPECTRUM_BINS];
    for (slot, &magnitude) in compressed.iter_mut().zip(frame.bins()) {
        *slot = compress(magnitude);
    }

    let mut bytes = [0u8; TRACE_LEN];
    for i in 0..SPECTRUM_BINS {
        let next = compressed[(i + 1).min(SPECTRUM_BINS - 1)];
        bytes[2 * i] = compressed[i];
        bytes[2 * i + 1] = ((compressed[i] as u16 + next as u16) / 2) as u8;
    }

    DisplayFrame::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_zero_is_zero() {
        assert_eq!(compress(0.0), 0);
    }

    #[test]
    fn test_compress_invalid_inputs_behave_as_zero() {
        assert_eq!(compress(-1.0), compress(0.0));
        assert_eq!(compress(-1000.0), compress(0.0));
        assert_eq!(compress(f32::NAN), compress(0.0));
        assert_eq!(compress(f32::NEG_INFINITY), compress(0.0));
    }

    #[test]
    fn test_compress_monotone_and_bounded() {
        let samples = [0.0, 0.25, 1.0, 2.0, 5.0, 10.0, 100.0, 1e4, 1e6, 1e9];

        let mut previous = 0;
        for &m in &samples {
            let height = compress(m);
            assert!(height <= TRACE_CEILING, "{} compressed to {}", m, height);
            assert!(height >= previous, "not monotone at {}", m);
            previous = height;
        }
    }

    #[test]
    fn test_compress_saturates_at_ceiling() {
        // 6 * ln(1e9) is far above the display budget
        assert_eq!(compress(1e9), TRACE_CEILING);
    }

    #[test]
    fn test_silent_frame_formats_to_flat_trace() {
        let trace = format_trace(&MagnitudeFrame::silent());
        assert_eq!(trace, DisplayFrame::blank());
    }

    #[test]
    fn test_uniform_frame_formats_to_constant_trace() {
        // All bins at 10.0: every compressed value is floor(6 * ln(11)) = 14,
        // and every interpolated value matches its equal neighbors.
        let frame = MagnitudeFrame::new([10.0; SPECTRUM_BINS]);
        let trace = format_trace(&frame);

        let expected = compress(10.0);
        assert_eq!(expected, 14);
        for bin in 0..SPECTRUM_BINS {
            assert_eq!(trace.column(bin), (expected, expected), "bin {}", bin);
        }
    }

    #[test]
    fn test_interpolated_value_is_floored_average() {
        let mut bins = [0.0; SPECTRUM_BINS];
        bins[3] = 1e9; // saturates to 64
        let trace = format_trace(&MagnitudeFrame::new(bins));

        // Bin 2 pairs (0, 64) -> 32; bin 3 pairs (64, 0) -> 32.
        assert_eq!(trace.column(2), (0, 32));
        assert_eq!(trace.column(3), (64, 32));
    }

    #[test]
    fn test_final_bin_pairs_with_itself() {
        let mut bins = [0.0; SPECTRUM_BINS];
        bins[SPECTRUM_BINS - 1] = 1e9;
        let trace = format_trace(&MagnitudeFrame::new(bins));

        // No right neighbor: the last pair stays flat at the bin's own value.
        assert_eq!(trace.column(SPECTRUM_BINS - 1), (64, 64));
    }

    #[test]
    fn test_format_is_deterministic() {
        let mut bins = [0.0; SPECTRUM_BINS];
        for (i, bin) in bins.iter_mut().enumerate() {
            *bin = (i as f32) * 3.5;
        }
        let frame = MagnitudeFrame::new(bins);
        assert_eq!(format_trace(&frame), format_trace(&frame));
    }
}

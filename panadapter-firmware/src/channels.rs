//! Shared interrupt-to-foreground state
//!
//! The two producer paths (audio capture, serial byte arrival) hand
//! their data to the panel loop through these statics. Both primitives
//! are interrupt-safe on their own; no further locking is needed.

use panadapter_core::spectrum::MagnitudeFrame;
use panadapter_core::sync::FrameMailbox;
use panadapter_core::telemetry::{OverflowPolicy, TelemetryFramer};

/// Latest captured spectrum frame, capture path → panel loop.
///
/// Latest-wins: under overload the panel simply skips stale frames.
pub static SPECTRUM_FRAMES: FrameMailbox<MagnitudeFrame> = FrameMailbox::new();

/// Sliding window of decoded telemetry bytes, serial path → panel loop.
pub static TELEMETRY: TelemetryFramer = TelemetryFramer::new(OverflowPolicy::EvictOldest);

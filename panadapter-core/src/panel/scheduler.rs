//! The foreground loop body

use crate::spectrum::{format_trace, DisplayFrame, MagnitudeFrame};
use crate::sync::FrameMailbox;
use crate::telemetry::{TelemetryFramer, TELEMETRY_CAPACITY};
use crate::traits::{
    ModeSwitch, PanelDisplay, TelemetryIndicator, TuningEncoder, STATUS_ROW, TELEMETRY_ROW,
};

use super::ControlPositions;

/// Status label when the telemetry link is up.
pub const LINK_UP_LABEL: &str = "LINK ON";

/// Status label when the telemetry link is down.
pub const LINK_DOWN_LABEL: &str = "LINK OFF";

/// Cooperative foreground scheduler for the front panel.
///
/// [`Panel::service`] runs one loop iteration. The firmware calls it
/// repeatedly from a single task; the only concurrent parties are the
/// capture interrupt feeding `frames` and the serial interrupt feeding
/// `telemetry`, both already interrupt-safe on their own.
pub struct Panel<'a, const SWITCHES: usize> {
    frames: &'a FrameMailbox<MagnitudeFrame>,
    telemetry: &'a TelemetryFramer<TELEMETRY_CAPACITY>,
    trace: DisplayFrame,
    render_pending: bool,
    positions: ControlPositions<SWITCHES>,
}

impl<'a, const SWITCHES: usize> Panel<'a, SWITCHES> {
    /// Create a panel over the shared mailbox and telemetry window
    pub const fn new(
        frames: &'a FrameMailbox<MagnitudeFrame>,
        telemetry: &'a TelemetryFramer<TELEMETRY_CAPACITY>,
    ) -> Self {
        Self {
            frames,
            telemetry,
            trace: DisplayFrame::blank(),
            render_pending: false,
            positions: ControlPositions::new(),
        }
    }

    /// Run one loop iteration. Never blocks.
    ///
    /// 1. Consume a ready spectrum frame, format it, mark a render due.
    /// 2. If a render is due, draw the trace and the telemetry row.
    /// 3. Draw the link status label from the current indicator state.
    /// 4. Poll each switch; dispatch its handler only on a changed
    ///    position. Only the first `SWITCHES` entries are tracked;
    ///    switches beyond the panel's capacity are never dispatched.
    /// 5. Service every encoder unconditionally.
    pub fn service(
        &mut self,
        display: &mut dyn PanelDisplay,
        switches: &mut [&mut dyn ModeSwitch],
        encoders: &mut [&mut dyn TuningEncoder],
        link: &dyn TelemetryIndicator,
    ) {
        if let Some(frame) = self.frames.take() {
            self.trace = format_trace(&frame);
            self.render_pending = true;
        }

        if self.render_pending {
            display.draw_spectrum(&self.trace);
            display.draw_text(TELEMETRY_ROW, &self.telemetry.snapshot_text());
            self.render_pending = false;
        }

        let label = if link.is_active() {
            LINK_UP_LABEL
        } else {
            LINK_DOWN_LABEL
        };
        display.draw_text(STATUS_ROW, label);

        for (index, switch) in switches.iter_mut().enumerate().take(SWITCHES) {
            let position = switch.current_position();
            if self.positions.update(index, position) {
                switch.apply(position);
            }
        }

        for encoder in encoders.iter_mut() {
            encoder.service();
        }
    }

    /// The most recently formatted trace.
    ///
    /// Freezes at its last value while no new frame arrives; a stalled
    /// capture path degrades to a frozen display, not an error.
    pub fn trace(&self) -> &DisplayFrame {
        &self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::OverflowPolicy;

    #[derive(Debug, PartialEq)]
    enum Draw {
        Spectrum(DisplayFrame),
        Text(u8, std::string::String),
    }

    #[derive(Default)]
    struct RecordingDisplay {
        calls: std::vec::Vec<Draw>,
    }

    impl PanelDisplay for RecordingDisplay {
        fn draw_spectrum(&mut self, trace: &DisplayFrame) {
            self.calls.push(Draw::Spectrum(*trace));
        }

        fn draw_text(&mut self, row: u8, text: &str) {
            self.calls.push(Draw::Text(row, text.into()));
        }
    }

    struct ScriptedSwitch {
        position: i16,
        applied: std::vec::Vec<i16>,
    }

    impl ScriptedSwitch {
        fn at(position: i16) -> Self {
            Self {
                position,
                applied: std::vec::Vec::new(),
            }
        }
    }

    impl ModeSwitch for ScriptedSwitch {
        fn current_position(&mut self) -> i16 {
            self.position
        }

        fn apply(&mut self, position: i16) {
            self.applied.push(position);
        }
    }

    #[derive(Default)]
    struct CountingEncoder {
        serviced: usize,
    }

    impl TuningEncoder for CountingEncoder {
        fn service(&mut self) {
            self.serviced += 1;
        }
    }

    struct Link(bool);

    impl TelemetryIndicator for Link {
        fn is_active(&self) -> bool {
            self.0
        }
    }

    fn frame_of(level: f32) -> MagnitudeFrame {
        MagnitudeFrame::new([level; crate::spectrum::SPECTRUM_BINS])
    }

    #[test]
    fn test_idle_iteration_draws_only_status() {
        let frames = FrameMailbox::new();
        let telemetry = TelemetryFramer::new(OverflowPolicy::EvictOldest);
        let mut panel = Panel::<0>::new(&frames, &telemetry);
        let mut display = RecordingDisplay::default();

        panel.service(&mut display, &mut [], &mut [], &Link(false));

        assert_eq!(
            display.calls,
            [Draw::Text(STATUS_ROW, LINK_DOWN_LABEL.into())]
        );
    }

    #[test]
    fn test_ready_frame_renders_spectrum_and_telemetry_once() {
        let frames = FrameMailbox::new();
        let telemetry = TelemetryFramer::new(OverflowPolicy::EvictOldest);
        for &byte in b"RST 599" {
            telemetry.push(byte);
        }
        let mut panel = Panel::<0>::new(&frames, &telemetry);
        let mut display = RecordingDisplay::default();

        frames.publish(frame_of(10.0));
        panel.service(&mut display, &mut [], &mut [], &Link(true));

        let expected_trace = format_trace(&frame_of(10.0));
        assert_eq!(
            display.calls,
            [
                Draw::Spectrum(expected_trace),
                Draw::Text(TELEMETRY_ROW, "RST 599".into()),
                Draw::Text(STATUS_ROW, LINK_UP_LABEL.into()),
            ]
        );

        // No new frame: the next iteration redraws nothing but the label
        display.calls.clear();
        panel.service(&mut display, &mut [], &mut [], &Link(true));
        assert_eq!(display.calls, [Draw::Text(STATUS_ROW, LINK_UP_LABEL.into())]);
    }

    #[test]
    fn test_unconsumed_frame_is_replaced_by_newest() {
        let frames = FrameMailbox::new();
        let telemetry = TelemetryFramer::new(OverflowPolicy::EvictOldest);
        let mut panel = Panel::<0>::new(&frames, &telemetry);
        let mut display = RecordingDisplay::default();

        frames.publish(frame_of(2.0));
        frames.publish(frame_of(200.0));
        panel.service(&mut display, &mut [], &mut [], &Link(false));

        assert_eq!(panel.trace(), &format_trace(&frame_of(200.0)));
    }

    #[test]
    fn test_switch_dispatch_only_on_change() {
        let frames = FrameMailbox::new();
        let telemetry = TelemetryFramer::new(OverflowPolicy::EvictOldest);
        let mut panel = Panel::<1>::new(&frames, &telemetry);
        let mut display = RecordingDisplay::default();
        let mut switch = ScriptedSwitch::at(1);

        // First observation primes the position without dispatching
        panel.service(&mut display, &mut [&mut switch], &mut [], &Link(false));
        assert!(switch.applied.is_empty());

        // Unchanged position: still no dispatch
        panel.service(&mut display, &mut [&mut switch], &mut [], &Link(false));
        assert!(switch.applied.is_empty());

        // Moved: exactly one dispatch with the new position
        switch.position = 3;
        panel.service(&mut display, &mut [&mut switch], &mut [], &Link(false));
        panel.service(&mut display, &mut [&mut switch], &mut [], &Link(false));
        assert_eq!(switch.applied, [3]);
    }

    #[test]
    fn test_extra_switches_beyond_capacity_never_dispatch() {
        let frames = FrameMailbox::new();
        let telemetry = TelemetryFramer::new(OverflowPolicy::EvictOldest);
        let mut panel = Panel::<1>::new(&frames, &telemetry);
        let mut display = RecordingDisplay::default();
        let mut tracked = ScriptedSwitch::at(0);
        let mut extra = ScriptedSwitch::at(0);

        panel.service(
            &mut display,
            &mut [&mut tracked, &mut extra],
            &mut [],
            &Link(false),
        );
        tracked.position = 1;
        extra.position = 1;
        panel.service(
            &mut display,
            &mut [&mut tracked, &mut extra],
            &mut [],
            &Link(false),
        );

        assert_eq!(tracked.applied, [1]);
        assert!(extra.applied.is_empty());
    }

    #[test]
    fn test_encoders_serviced_every_iteration() {
        let frames = FrameMailbox::new();
        let telemetry = TelemetryFramer::new(OverflowPolicy::EvictOldest);
        let mut panel = Panel::<0>::new(&frames, &telemetry);
        let mut display = RecordingDisplay::default();
        let mut encoder = CountingEncoder::default();

        for _ in 0..4 {
            panel.service(&mut display, &mut [], &mut [&mut encoder], &Link(false));
        }
        assert_eq!(encoder.serviced, 4);
    }
}

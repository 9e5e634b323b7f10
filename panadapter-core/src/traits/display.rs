//! Front panel display trait

use crate::spectrum::DisplayFrame;

/// Text row showing the telemetry-link status label.
pub const STATUS_ROW: u8 = 0;

/// Text row showing the decoded telemetry string.
pub const TELEMETRY_ROW: u8 = 1;

/// Trait for the front panel display.
///
/// The drawing primitives themselves live behind this seam; the control
/// loop only hands over fully formatted traces and bounded strings.
pub trait PanelDisplay {
    /// Draw one spectrum trace (256 bytes, two per bin)
    fn draw_spectrum(&mut self, trace: &DisplayFrame);

    /// Draw a text string at the given row
    fn draw_text(&mut self, row: u8, text: &str);
}

//! UART display driver
//!
//! Implements the core's `PanelDisplay` trait by pushing framed updates
//! to the display unit over any blocking byte sink. Writes go through
//! the buffered UART, so a draw call only blocks when the TX ring is
//! full.

use defmt::*;
use embedded_io::Write;

use panadapter_core::spectrum::DisplayFrame;
use panadapter_core::traits::PanelDisplay;
use panadapter_protocol::frame::MAX_FRAME_SIZE;
use panadapter_protocol::{Frame, PanelMessage};

/// Display unit driver on the panel's TX-only link
pub struct UartDisplay<W: Write> {
    tx: W,
}

impl<W: Write> UartDisplay<W> {
    /// Take ownership of the display link's TX half
    pub fn new(tx: W) -> Self {
        Self { tx }
    }

    /// Blank the display
    pub fn clear(&mut self) {
        self.send(PanelMessage::Clear);
    }

    fn send(&mut self, message: PanelMessage<'_>) {
        match message.to_frame() {
            Ok(frame) => self.write_frame(&frame),
            Err(e) => warn!("display message rejected: {:?}", e),
        }
    }

    fn write_frame(&mut self, frame: &Frame) {
        let mut buf = [0u8; MAX_FRAME_SIZE];
        match frame.encode(&mut buf) {
            Ok(len) => {
                if self.tx.write_all(&buf[..len]).is_err() {
                    warn!("display link write failed");
                }
            }
            Err(e) => {
                warn!("frame encode failed: {:?}", e);
            }
        }
    }
}

impl<W: Write> PanelDisplay for UartDisplay<W> {
    fn draw_spectrum(&mut self, trace: &DisplayFrame) {
        self.send(PanelMessage::Spectrum(trace.as_bytes()));
    }

    fn draw_text(&mut self, row: u8, text: &str) {
        self.send(PanelMessage::Text { row, text });
    }
}

//! Message types for the display link
//!
//! All traffic flows panel → display; the display unit never talks back
//! on this link (user input reaches the panel through its own switches
//! and encoders).

use heapless::Vec;

use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};

// Message type IDs
pub const MSG_CLEAR: u8 = 0x10;
pub const MSG_SPECTRUM: u8 = 0x11;
pub const MSG_TEXT: u8 = 0x12;

/// Bytes in one full spectrum trace (two per magnitude bin)
pub const SPECTRUM_TRACE_LEN: usize = 256;

/// Characters per text row on the display
pub const TEXT_COLS: usize = 38;

/// Messages from the panel to the display unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMessage<'a> {
    /// Blank the whole panel
    Clear,
    /// One full spectrum trace
    Spectrum(&'a [u8; SPECTRUM_TRACE_LEN]),
    /// Text at a row; truncated to [`TEXT_COLS`] characters
    Text { row: u8, text: &'a str },
}

impl<'a> PanelMessage<'a> {
    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            PanelMessage::Clear => Ok(Frame::empty(MSG_CLEAR)),
            PanelMessage::Spectrum(trace) => Frame::new(MSG_SPECTRUM, trace.as_slice()),
            PanelMessage::Text { row, text } => {
                // Payload: [row][len][chars...]
                let text_bytes = text.as_bytes();
                let len = text_bytes.len().min(TEXT_COLS);

                let mut payload = Vec::<u8, MAX_PAYLOAD_SIZE>::new();
                payload.push(*row).map_err(|_| FrameError::PayloadTooLarge)?;
                payload
                    .push(len as u8)
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                payload
                    .extend_from_slice(&text_bytes[..len])
                    .map_err(|_| FrameError::PayloadTooLarge)?;

                Frame::new(MSG_TEXT, &payload)
            }
        }
    }
}

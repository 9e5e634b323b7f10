//! Panadapter display link wire format
//!
//! The front panel pushes its screen content to the display unit over a
//! UART. All updates use a simple binary frame format:
//!
//! ```text
//! ┌───────┬──────┬──────────┬─────────────┬──────────┬──────┐
//! │ START │ TYPE │ LENGTH   │ PAYLOAD     │ CHECKSUM │ STOP │
//! │ 241   │ 1B   │ 2B (BE)  │ 0–256B      │ 1B       │ 242  │
//! └───────┴──────┴──────────┴─────────────┴──────────┴──────┘
//! ```
//!
//! The display unit is a dumb terminal: it decodes frames and draws.
//! This crate is encode-only — the decoder lives in the display unit's
//! own firmware.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;

pub use frame::{Frame, FrameError, FRAME_START, FRAME_STOP, MAX_PAYLOAD_SIZE};
pub use messages::{PanelMessage, SPECTRUM_TRACE_LEN, TEXT_COLS};

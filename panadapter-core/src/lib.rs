//! Board-agnostic core of the panadapter front panel firmware
//!
//! This crate contains all control-loop logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display, switches, encoders, link)
//! - Spectrum log-compression and display formatting
//! - Interrupt-to-foreground frame handoff (single-slot mailbox)
//! - Sliding telemetry receive buffer
//! - The cooperative foreground scheduler
//!
//! Everything here is wait-free and bounded-step: interrupt-side
//! operations mask interrupts only for a short, fixed-size copy.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod panel;
pub mod spectrum;
pub mod sync;
pub mod telemetry;
pub mod traits;

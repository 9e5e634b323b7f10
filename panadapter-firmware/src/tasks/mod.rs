//! Embassy async tasks
//!
//! Each task runs independently; the capture and telemetry tasks feed
//! the panel task through the statics in [`crate::channels`].

pub mod capture;
pub mod panel;
pub mod telemetry_rx;

pub use capture::capture_task;
pub use panel::panel_task;
pub use telemetry_rx::telemetry_rx_task;

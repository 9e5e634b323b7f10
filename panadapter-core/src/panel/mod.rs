//! Foreground panel scheduler
//!
//! The cooperative loop body: consume spectrum frames, refresh the
//! display, show link status and service the user controls. Preempted
//! only by interrupts; never blocks on any step.

mod positions;
mod scheduler;

pub use positions::ControlPositions;
pub use scheduler::{Panel, LINK_DOWN_LABEL, LINK_UP_LABEL};

//! Interrupt-to-foreground handoff primitives

mod mailbox;

pub use mailbox::FrameMailbox;

//! Sliding receive window for telemetry bytes

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::{String, Vec};

use super::TELEMETRY_CAPACITY;

/// What to do with a new byte once the window is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OverflowPolicy {
    /// Shift the window left, dropping the oldest byte (the window is a
    /// transcript of the most recent bytes). Matches the panel's
    /// historical behavior and is the default.
    #[default]
    EvictOldest,
    /// Drop the incoming byte and keep the window as-is.
    RejectNew,
}

#[derive(Debug)]
struct Window<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> Window<N> {
    const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }
}

/// Fixed-capacity sliding byte buffer fed from interrupt context.
///
/// `push` runs in the byte-arrival interrupt; `snapshot` runs in the
/// foreground. Both take a critical section, so a snapshot is always a
/// consistent point-in-time copy — never a torn mixture of old and new
/// bytes — and the masked window is bounded by one `N`-byte copy.
pub struct TelemetryFramer<const N: usize = TELEMETRY_CAPACITY> {
    window: Mutex<RefCell<Window<N>>>,
    policy: OverflowPolicy,
}

impl<const N: usize> TelemetryFramer<N> {
    /// Create an empty framer with the given overflow policy
    pub const fn new(policy: OverflowPolicy) -> Self {
        Self {
            window: Mutex::new(RefCell::new(Window::new())),
            policy,
        }
    }

    /// Append one received byte. Callable from interrupt context.
    ///
    /// While the window has room the byte is appended; once full the
    /// configured [`OverflowPolicy`] applies.
    pub fn push(&self, byte: u8) {
        critical_section::with(|cs| {
            let mut window = self.window.borrow_ref_mut(cs);
            if window.len < N {
                let at = window.len;
                window.buf[at] = byte;
                window.len = at + 1;
            } else {
                match self.policy {
                    OverflowPolicy::EvictOldest => {
                        window.buf.copy_within(1.., 0);
                        window.buf[N - 1] = byte;
                    }
                    OverflowPolicy::RejectNew => {}
                }
            }
        });
    }

    /// Consistent copy of the window contents, oldest byte first.
    pub fn snapshot(&self) -> Vec<u8, N> {
        critical_section::with(|cs| {
            let window = self.window.borrow_ref(cs);
            let mut out = Vec::new();
            // Cannot fail: len never exceeds N
            let _ = out.extend_from_slice(&window.buf[..window.len]);
            out
        })
    }

    /// Snapshot rendered for the display: non-printable bytes become spaces.
    pub fn snapshot_text(&self) -> String<N> {
        let mut text = String::new();
        for &byte in self.snapshot().iter() {
            let c = if (0x20..=0x7e).contains(&byte) {
                byte as char
            } else {
                ' '
            };
            let _ = text.push(c);
        }
        text
    }

    /// Discard all buffered bytes
    pub fn clear(&self) {
        critical_section::with(|cs| {
            self.window.borrow_ref_mut(cs).len = 0;
        });
    }

    /// Number of buffered bytes
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.window.borrow_ref(cs).len)
    }

    /// Whether no bytes have been received yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The configured overflow policy
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }
}

impl<const N: usize> Default for TelemetryFramer<N> {
    fn default() -> Self {
        Self::new(OverflowPolicy::EvictOldest)
    }
}

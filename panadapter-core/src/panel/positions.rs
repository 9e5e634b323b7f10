//! Last-observed switch positions

/// Remembered mode switch positions.
///
/// Foreground-owned with no interrupt writer, so no synchronization is
/// needed. A position is primed on first observation without reporting a
/// change, matching the panel's power-on behavior.
#[derive(Debug, Clone, Copy)]
pub struct ControlPositions<const N: usize> {
    last: [Option<i16>; N],
}

impl<const N: usize> ControlPositions<N> {
    /// Create with no positions observed yet
    pub const fn new() -> Self {
        Self { last: [None; N] }
    }

    /// Record a polled position.
    ///
    /// Returns `true` when a previously recorded position differs from
    /// the new one; the first observation only primes the slot. An
    /// out-of-range index records nothing and reports no change.
    pub fn update(&mut self, index: usize, position: i16) -> bool {
        let Some(slot) = self.last.get_mut(index) else {
            return false;
        };
        let changed = matches!(*slot, Some(previous) if previous != position);
        *slot = Some(position);
        changed
    }

    /// The last recorded position for a switch; `None` when unobserved
    /// or out of range
    pub fn get(&self, index: usize) -> Option<i16> {
        self.last.get(index).copied().flatten()
    }
}

impl<const N: usize> Default for ControlPositions<N> {
    fn default() -> Self {
        Self::new()
    }
}

//! One-slot frame handshake between the two execution contexts.
//!
//! The cooperative loop stages a corrected frame and publishes; the periodic
//! tick consumes and ships it. This is a handshake, not a queue: when the
//! loop misses a tick the previous transmit buffer is simply shipped again.
//! The flag is the only state shared across the contexts, guarded by a
//! critical section so it is safe against interrupt preemption on
//! single-core targets without atomic read-modify-write.

use core::cell::Cell;

use critical_section::Mutex;

/// Shared "a staged frame is waiting to be shipped" flag.
pub struct FrameGate {
    staged: Mutex<Cell<bool>>,
}

impl FrameGate {
    /// A gate with nothing staged; the loop may produce immediately.
    pub const fn new() -> Self {
        Self {
            staged: Mutex::new(Cell::new(false)),
        }
    }

    /// Mark the transmit buffer as up to date (cooperative loop side).
    pub fn publish(&self) {
        critical_section::with(|cs| self.staged.borrow(cs).set(true));
    }

    /// Take the flag (periodic tick side).
    ///
    /// Returns `true` if a freshly staged frame was pending; `false` means
    /// this tick is a re-transmission of the previous frame.
    pub fn consume(&self) -> bool {
        critical_section::with(|cs| {
            let cell = self.staged.borrow(cs);
            let pending = cell.get();
            cell.set(false);
            pending
        })
    }

    /// Whether a staged frame is still waiting for the next tick.
    pub fn is_pending(&self) -> bool {
        critical_section::with(|cs| self.staged.borrow(cs).get())
    }
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new()
    }
}

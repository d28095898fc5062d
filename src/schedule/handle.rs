//! Cancellation token for one scheduled run

#[cfg(feature = "std")]
use std::sync::Arc;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::sync::Arc;

use core::sync::atomic::{AtomicU8, Ordering};

const ACTIVE: u8 = 0;
const CANCELLED: u8 = 1;
const FINISHED: u8 = 2;

/// Opaque handle to a run started by a
/// [`SamplingScheduler`](crate::SamplingScheduler)
///
/// Clones share one token. A handle moves from active to either cancelled
/// (paused, reset, failed, or [`cancel`](RunHandle::cancel)ed from outside)
/// or finished (reached its target). Both end states are final.
#[derive(Clone, Debug)]
pub struct RunHandle {
    id: u64,
    status: Arc<AtomicU8>,
}

impl RunHandle {
    pub(crate) fn new(id: u64) -> Self {
        Self {
            id,
            status: Arc::new(AtomicU8::new(ACTIVE)),
        }
    }

    /// Identifier, unique per scheduler
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Stop all future steps of this run
    ///
    /// No-op on a handle that already finished or was cancelled.
    pub fn cancel(&self) {
        let _ = self
            .status
            .compare_exchange(ACTIVE, CANCELLED, Ordering::AcqRel, Ordering::Acquire);
    }

    pub(crate) fn finish(&self) {
        let _ = self
            .status
            .compare_exchange(ACTIVE, FINISHED, Ordering::AcqRel, Ordering::Acquire);
    }

    /// Still allowed to schedule steps
    pub fn is_active(&self) -> bool {
        self.status.load(Ordering::Acquire) == ACTIVE
    }

    pub fn is_cancelled(&self) -> bool {
        self.status.load(Ordering::Acquire) == CANCELLED
    }

    /// Reached its target count
    pub fn is_finished(&self) -> bool {
        self.status.load(Ordering::Acquire) == FINISHED
    }
}

impl PartialEq for RunHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.status, &other.status)
    }
}

impl Eq for RunHandle {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_idempotent() {
        let handle = RunHandle::new(1);
        assert!(handle.is_active());

        handle.cancel();
        handle.cancel();
        assert!(handle.is_cancelled());
        assert!(!handle.is_active());
    }

    #[test]
    fn test_finished_handle_ignores_cancel() {
        let handle = RunHandle::new(1);
        handle.finish();
        handle.cancel();
        assert!(handle.is_finished());
        assert!(!handle.is_cancelled());
    }

    #[test]
    fn test_clones_share_status() {
        let handle = RunHandle::new(3);
        let observer = handle.clone();
        handle.cancel();
        assert!(observer.is_cancelled());
        assert_eq!(handle, observer);
        assert_ne!(handle, RunHandle::new(3));
    }
}

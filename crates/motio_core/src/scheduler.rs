//! Frame scheduling.
//!
//! A [`FrameScheduler`] is the "run once before the next frame" capability
//! animation drivers register their ticks with. Embedders implement it on
//! top of whatever drives their repaints (a winit redraw request, a
//! platform vsync source); [`ManualScheduler`] is a deterministic
//! in-process implementation pumped explicitly, used by tests and headless
//! drivers.

use std::cell::RefCell;
use std::collections::VecDeque;

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use thiserror::Error;

new_key_type! {
    /// Identifies one scheduled frame callback.
    pub struct FrameHandle;
}

/// A callback delivered once before the next frame.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Errors from the checked scheduler operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    /// The handle does not name a pending callback - it was already
    /// delivered, already canceled, or belongs to another scheduler.
    #[error("stale frame handle: callback already delivered or canceled")]
    StaleHandle,
}

/// The "run once before the next repaint" capability.
///
/// A scheduled callback is delivered exactly once, asynchronously with
/// respect to `schedule`. `cancel` is best-effort: it prevents a
/// not-yet-delivered callback from firing and is a no-op for handles that
/// have already been delivered or canceled.
pub trait FrameScheduler {
    /// Register `callback` to run before the next frame.
    fn schedule(&self, callback: FrameCallback) -> FrameHandle;

    /// Prevent a not-yet-delivered callback from firing.
    fn cancel(&self, handle: FrameHandle);
}

/// Deterministic scheduler pumped explicitly by the caller.
///
/// [`run_frame`](ManualScheduler::run_frame) delivers every callback that
/// was pending when the frame began. Callbacks scheduled during delivery
/// land on the following frame, matching the repaint-callback semantics
/// the animation drivers are written against.
///
/// Single-threaded by design; panics from delivered callbacks propagate to
/// the `run_frame` caller.
pub struct ManualScheduler {
    pending: RefCell<SlotMap<FrameHandle, FrameCallback>>,
    order: RefCell<VecDeque<FrameHandle>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            pending: RefCell::new(SlotMap::with_key()),
            order: RefCell::new(VecDeque::new()),
        }
    }

    /// Deliver every callback pending at the start of this frame, in
    /// schedule order. Returns the number of callbacks delivered.
    pub fn run_frame(&self) -> usize {
        // Snapshot the frame's due list before invoking anything so
        // callbacks may schedule and cancel re-entrantly.
        let due: SmallVec<[FrameHandle; 8]> = self.order.borrow_mut().drain(..).collect();

        let mut delivered = 0;
        for handle in due {
            // Canceled entries leave stale handles in the order queue.
            let Some(callback) = self.pending.borrow_mut().remove(handle) else {
                continue;
            };
            callback();
            delivered += 1;
        }

        if delivered > 0 {
            tracing::trace!(delivered, "frame callbacks delivered");
        }
        delivered
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Cancel a pending callback, reporting whether it was still live.
    pub fn try_cancel(&self, handle: FrameHandle) -> Result<(), SchedulerError> {
        self.pending
            .borrow_mut()
            .remove(handle)
            .map(|_| ())
            .ok_or(SchedulerError::StaleHandle)
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&self, callback: FrameCallback) -> FrameHandle {
        let handle = self.pending.borrow_mut().insert(callback);
        self.order.borrow_mut().push_back(handle);
        handle
    }

    fn cancel(&self, handle: FrameHandle) {
        let _ = self.try_cancel(handle);
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

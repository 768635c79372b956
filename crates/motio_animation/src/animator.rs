//! The animation driver
//!
//! [`Animator`] owns the injected timing capabilities and is the entry
//! point for starting tweens and frame loops.

use std::rc::Rc;

use motio_core::{Clock, FrameScheduler};

use crate::frame_loop::{self, LoopHandle};
use crate::tween::{self, TweenHandle, TweenSpec};

/// Drives tweens and frame loops against an injected clock and scheduler.
///
/// The animator holds no animation state of its own; every `animate` or
/// `start_loop` call creates a self-contained scheduling chain that lives
/// in the scheduler until it terminates. Cloning an animator is cheap and
/// yields a driver over the same timeline.
///
/// Everything runs on the single cooperative timeline the scheduler
/// delivers frames on. Callbacks must not block; a long callback delays
/// every other scheduled tick on the timeline.
#[derive(Clone)]
pub struct Animator {
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn FrameScheduler>,
}

impl Animator {
    pub fn new(clock: Rc<dyn Clock>, scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self { clock, scheduler }
    }

    /// Start animating a scalar according to `spec`.
    ///
    /// The first tick runs on the next frame. With `duration_ms == 0.0` the
    /// tween completes synchronously before this call returns and no frame
    /// is consumed.
    ///
    /// The engine validates nothing: a custom easing curve producing NaN or
    /// infinite values feeds them straight into `on_update`, and panics
    /// raised by callbacks propagate out of the frame delivery (or out of
    /// this call in the zero-duration case).
    pub fn animate(&self, spec: TweenSpec) -> TweenHandle {
        tween::spawn(self.clock.clone(), self.scheduler.clone(), spec)
    }

    /// Start an unbounded per-frame loop.
    ///
    /// `f` receives the elapsed milliseconds since the previous tick (for
    /// the first tick, since this call). The loop runs until the returned
    /// handle is stopped; stopping lets an already-scheduled tick fire once
    /// more before the loop winds down.
    pub fn start_loop(&self, f: impl FnMut(f64) + 'static) -> LoopHandle {
        frame_loop::spawn(self.clock.clone(), self.scheduler.clone(), f)
    }
}

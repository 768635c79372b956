//! Scalar tweens
//!
//! A tween drives one `f64` value from a start to an end over a fixed
//! duration, sampling an easing curve on every frame tick and reporting
//! progress through lifecycle callbacks. Ticks are scheduled one at a time
//! on the injected frame scheduler; between frames a tween holds no CPU.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use motio_core::{Clock, FrameHandle, FrameScheduler};

use crate::easing::Easing;

/// Steps smaller than this (in value units) snap the tween to its target,
/// so strongly eased tails terminate instead of creeping toward the end.
const SNAP_STEP: f64 = 0.1;

/// Per-tick callback: current value and the change since the previous tick.
pub type UpdateFn = Box<dyn FnMut(f64, f64)>;
/// Fires exactly once when the tween reaches its end value.
pub type CompleteFn = Box<dyn FnOnce()>;
/// Fires exactly once when a canceled tween observes its flag.
pub type CanceledFn = Box<dyn FnOnce()>;

/// Configuration for one tween run.
///
/// Defaults: `start` and `end` are `0.0`, `duration_ms` is `300.0`, the
/// easing curve is [`Easing::EaseOutCubic`], and all callbacks are no-ops.
///
/// ```rust
/// use motio_animation::{Easing, TweenSpec};
///
/// let _spec = TweenSpec::new()
///     .start(0.0)
///     .end(120.0)
///     .duration_ms(250.0)
///     .easing(Easing::EaseOutQuart)
///     .on_update(|value, step| {
///         let _ = (value, step);
///     });
/// ```
pub struct TweenSpec {
    start: f64,
    end: f64,
    duration_ms: f64,
    easing: Easing,
    on_update: Option<UpdateFn>,
    on_complete: Option<CompleteFn>,
    on_canceled: Option<CanceledFn>,
}

impl TweenSpec {
    pub fn new() -> Self {
        Self {
            start: 0.0,
            end: 0.0,
            duration_ms: 300.0,
            easing: Easing::default(),
            on_update: None,
            on_complete: None,
            on_canceled: None,
        }
    }

    /// Value at the first tick.
    pub fn start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Value the tween terminates at, exactly.
    pub fn end(mut self, end: f64) -> Self {
        self.end = end;
        self
    }

    /// Nominal duration in milliseconds. `0.0` completes synchronously.
    pub fn duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Easing curve shaping the interpolation.
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Per-tick callback receiving `(value, step)`, both rounded to six
    /// decimal places.
    pub fn on_update(mut self, f: impl FnMut(f64, f64) + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    /// Completion callback; mutually exclusive with `on_canceled`.
    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Cancellation callback; mutually exclusive with `on_complete`.
    pub fn on_canceled(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_canceled = Some(Box::new(f));
        self
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// Cancellation handle returned by [`Animator::animate`].
///
/// [`cancel`](TweenHandle::cancel) raises a flag the next tick observes; it
/// never stops an already-scheduled tick synchronously. Canceling
/// repeatedly, or after the tween completed naturally, is a no-op.
///
/// [`Animator::animate`]: crate::Animator::animate
#[derive(Clone)]
pub struct TweenHandle {
    canceled: Rc<Cell<bool>>,
}

impl TweenHandle {
    pub fn cancel(&self) {
        self.canceled.set(true);
    }

    /// Handle for a tween that finished before any frame was scheduled.
    fn inert() -> Self {
        Self {
            canceled: Rc::new(Cell::new(false)),
        }
    }
}

/// Mutable run state, owned by the scheduling chain: only the in-flight
/// tick closure and its successor ever hold the `Rc`.
struct TweenState {
    start: f64,
    end: f64,
    duration_ms: f64,
    easing: Easing,
    on_update: Option<UpdateFn>,
    on_complete: Option<CompleteFn>,
    on_canceled: Option<CanceledFn>,
    started_at: Option<f64>,
    last_value: f64,
    pending_frame: Option<FrameHandle>,
    canceled: Rc<Cell<bool>>,
}

pub(crate) fn spawn(
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn FrameScheduler>,
    spec: TweenSpec,
) -> TweenHandle {
    let TweenSpec {
        start,
        end,
        duration_ms,
        easing,
        mut on_update,
        on_complete,
        on_canceled,
    } = spec;

    // Zero duration completes synchronously, consuming no frame at all.
    if duration_ms == 0.0 {
        if let Some(f) = on_update.as_mut() {
            f(round6(end), 0.0);
        }
        if let Some(f) = on_complete {
            f();
        }
        tracing::trace!(end, "zero-duration tween completed synchronously");
        return TweenHandle::inert();
    }

    let canceled = Rc::new(Cell::new(false));
    let state = Rc::new(RefCell::new(TweenState {
        start,
        end,
        duration_ms,
        easing,
        on_update,
        on_complete,
        on_canceled,
        started_at: None,
        last_value: start,
        pending_frame: None,
        canceled: canceled.clone(),
    }));

    tracing::trace!(start, end, duration_ms, "tween started");
    schedule_tick(&clock, &scheduler, &state);

    TweenHandle { canceled }
}

fn schedule_tick(
    clock: &Rc<dyn Clock>,
    scheduler: &Rc<dyn FrameScheduler>,
    state: &Rc<RefCell<TweenState>>,
) {
    // Never leave two ticks in flight for one tween.
    let stale = state.borrow_mut().pending_frame.take();
    if let Some(handle) = stale {
        scheduler.cancel(handle);
    }

    let tick_clock = clock.clone();
    let tick_scheduler = scheduler.clone();
    let tick_state = state.clone();
    let handle = scheduler.schedule(Box::new(move || {
        tick(tick_clock, tick_scheduler, tick_state);
    }));
    state.borrow_mut().pending_frame = Some(handle);
}

fn tick(clock: Rc<dyn Clock>, scheduler: Rc<dyn FrameScheduler>, state: Rc<RefCell<TweenState>>) {
    let (value, step, end) = {
        let mut st = state.borrow_mut();
        st.pending_frame = None;

        let now = clock.now_ms();
        let started_at = *st.started_at.get_or_insert(now);
        // Clamped so a late frame cannot run the tween past its duration.
        let elapsed = (now - started_at).min(st.duration_ms);
        let t = elapsed / st.duration_ms;

        let mut value = st.start + (st.end - st.start) * st.easing.apply(t);

        // Overshoot clamp. Direction is recomputed every tick so ascending
        // and descending ranges behave symmetrically.
        if st.start < st.end {
            if value > st.end {
                value = st.end;
            }
        } else if value < st.end {
            value = st.end;
        }

        let mut step = value - st.last_value;
        st.last_value = value;

        // Micro-step snapping: a tiny nonzero step means the eased curve
        // has flattened out near the target; snap to the end so the tween
        // terminates in bounded ticks.
        if step != 0.0 && step.abs() < SNAP_STEP {
            value = st.end;
            step = value - st.last_value;
            st.last_value = value;
        }

        (value, step, st.end)
    };

    // Deliver the update outside the state borrow; the callback may start
    // new tweens or cancel this one.
    let update = state.borrow_mut().on_update.take();
    if let Some(mut f) = update {
        f(round6(value), round6(step));
        state.borrow_mut().on_update = Some(f);
    }

    if state.borrow().canceled.get() {
        let f = state.borrow_mut().on_canceled.take();
        if let Some(f) = f {
            f();
        }
        tracing::trace!("tween canceled");
    } else if value == end {
        let f = state.borrow_mut().on_complete.take();
        if let Some(f) = f {
            f();
        }
        tracing::trace!(end, "tween completed");
    } else {
        schedule_tick(&clock, &scheduler, &state);
    }
}

/// Values cross the callback boundary rounded to six decimal places; the
/// engine keeps full precision internally.
fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

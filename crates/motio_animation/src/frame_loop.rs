//! Continuous frame loops
//!
//! A frame loop repeatedly invokes a caller-supplied delta-time callback,
//! once per frame, until its handle is told to stop. Unlike a tween it has
//! no duration and no target value; it exists to drive free-running
//! per-frame logic such as physics integration or drag tracking.

use std::cell::Cell;
use std::rc::Rc;

use motio_core::{Clock, FrameScheduler};

/// Controls one running frame loop.
///
/// Each loop owns its running flag, carried by this handle: stopping one
/// loop never affects another, and any number of loops may run on the same
/// scheduler. Stopping is cooperative - a tick already in flight still
/// fires once more, then the loop stops rescheduling.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    /// Ask the loop to stop. Idempotent; safe to call at any time.
    pub fn stop(&self) {
        if self.running.replace(false) {
            tracing::trace!("frame loop stopping");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

pub(crate) fn spawn(
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn FrameScheduler>,
    f: impl FnMut(f64) + 'static,
) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    tracing::trace!("frame loop started");

    let last = clock.now_ms();
    schedule_tick(clock, scheduler, running.clone(), Box::new(f), last);

    LoopHandle { running }
}

fn schedule_tick(
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn FrameScheduler>,
    running: Rc<Cell<bool>>,
    mut f: Box<dyn FnMut(f64)>,
    last: f64,
) {
    let next_scheduler = scheduler.clone();
    let _ = scheduler.schedule(Box::new(move || {
        let now = clock.now_ms();
        f(now - last);
        // The flag is read after the callback: a stop requested while this
        // tick was in flight still gets this one delivery.
        if running.get() {
            schedule_tick(clock, next_scheduler, running, f, now);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::Animator;
    use motio_core::{ManualClock, ManualScheduler};
    use std::cell::RefCell;

    fn rig() -> (Rc<ManualClock>, Rc<ManualScheduler>, Animator) {
        let clock = Rc::new(ManualClock::new());
        let scheduler = Rc::new(ManualScheduler::new());
        let animator = Animator::new(clock.clone(), scheduler.clone());
        (clock, scheduler, animator)
    }

    #[test]
    fn reports_the_clock_delta_each_tick() {
        let (clock, scheduler, animator) = rig();
        let deltas = Rc::new(RefCell::new(Vec::new()));

        let d = deltas.clone();
        let _handle = animator.start_loop(move |delta| d.borrow_mut().push(delta));

        for increment in [16.0, 16.0, 33.0, 7.0] {
            clock.advance(increment);
            scheduler.run_frame();
        }

        assert_eq!(*deltas.borrow(), vec![16.0, 16.0, 33.0, 7.0]);
    }

    #[test]
    fn stop_allows_at_most_one_further_tick() {
        let (clock, scheduler, animator) = rig();
        let ticks = Rc::new(Cell::new(0));

        let t = ticks.clone();
        let handle = animator.start_loop(move |_| t.set(t.get() + 1));

        clock.advance(16.0);
        scheduler.run_frame();
        assert_eq!(ticks.get(), 1);

        // The next tick is already in flight; it fires once more.
        handle.stop();
        assert!(!handle.is_running());
        clock.advance(16.0);
        scheduler.run_frame();
        assert_eq!(ticks.get(), 2);

        // Nothing after that.
        clock.advance(16.0);
        assert_eq!(scheduler.run_frame(), 0);
        assert_eq!(ticks.get(), 2);
    }

    #[test]
    fn stop_is_idempotent() {
        let (clock, scheduler, animator) = rig();
        let ticks = Rc::new(Cell::new(0));

        let t = ticks.clone();
        let handle = animator.start_loop(move |_| t.set(t.get() + 1));

        // Stop before any tick, twice.
        handle.stop();
        handle.stop();

        clock.advance(16.0);
        scheduler.run_frame();
        clock.advance(16.0);
        scheduler.run_frame();

        // Only the in-flight tick fired.
        assert_eq!(ticks.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn independent_loops_do_not_interfere() {
        let (clock, scheduler, animator) = rig();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let a = first.clone();
        let first_handle = animator.start_loop(move |_| a.set(a.get() + 1));
        let b = second.clone();
        let second_handle = animator.start_loop(move |_| b.set(b.get() + 1));

        clock.advance(16.0);
        scheduler.run_frame();
        assert_eq!((first.get(), second.get()), (1, 1));

        // Stopping the first must not starve the second.
        first_handle.stop();
        clock.advance(16.0);
        scheduler.run_frame();
        clock.advance(16.0);
        scheduler.run_frame();

        assert_eq!(first.get(), 2);
        assert_eq!(second.get(), 3);
        assert!(second_handle.is_running());
    }
}

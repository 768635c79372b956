//! Headless demo: a tween easing a trail position toward its target while
//! a frame loop reports per-frame deltas.
//!
//! Run with: `cargo run -p motio_animation --example pointer_trail`
//! Set `RUST_LOG=trace` to watch the engine's lifecycle events.

use std::rc::Rc;
use std::time::Duration;

use motio_animation::{Animator, Easing, TweenSpec};
use motio_core::{ManualScheduler, SystemClock};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let clock = Rc::new(SystemClock::new());
    let scheduler = Rc::new(ManualScheduler::new());
    let animator = Animator::new(clock.clone(), scheduler.clone());

    let _tween = animator.animate(
        TweenSpec::new()
            .start(0.0)
            .end(240.0)
            .duration_ms(400.0)
            .easing(Easing::EaseOutQuart)
            .on_update(|value, step| println!("x = {value:8.3} (step {step:+.3})"))
            .on_complete(|| println!("trail settled")),
    );

    let loop_handle = animator.start_loop(|delta| {
        tracing::debug!(delta, "frame");
    });

    // Pump the scheduler at roughly 60Hz. The loop keeps exactly one frame
    // pending, so anything above that is the tween still in flight.
    while scheduler.pending() > 1 {
        scheduler.run_frame();
        std::thread::sleep(Duration::from_millis(16));
    }

    // Wind the loop down; its in-flight tick fires once more.
    loop_handle.stop();
    scheduler.run_frame();
}

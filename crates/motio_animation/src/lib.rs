//! Motio Animation System
//!
//! Eased scalar tweens and continuous frame loops, driven by an injected
//! frame scheduler and monotonic clock.
//!
//! # Features
//!
//! - **Tweens**: drive one value from start to end over a fixed duration,
//!   shaped by a pluggable easing curve, with update/complete/cancel
//!   lifecycle callbacks
//! - **Easing**: cubic, quartic and sinusoidal curves plus caller-supplied
//!   functions
//! - **Frame Loops**: unbounded delta-time callbacks for free-running
//!   per-frame logic
//! - **Deterministic**: everything runs against `motio_core` clocks and
//!   schedulers, so tests script time instead of sleeping
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use motio_animation::{Animator, Easing, TweenSpec};
//! use motio_core::{ManualClock, ManualScheduler};
//!
//! let clock = Rc::new(ManualClock::new());
//! let scheduler = Rc::new(ManualScheduler::new());
//! let animator = Animator::new(clock.clone(), scheduler.clone());
//!
//! let handle = animator.animate(
//!     TweenSpec::new()
//!         .start(0.0)
//!         .end(100.0)
//!         .duration_ms(250.0)
//!         .easing(Easing::EaseOutQuart)
//!         .on_update(|value, step| println!("{value} (+{step})")),
//! );
//!
//! // Pump frames until the tween settles.
//! while scheduler.pending() > 0 {
//!     scheduler.run_frame();
//!     clock.advance(16.0);
//! }
//! # drop(handle);
//! ```

pub mod animator;
pub mod easing;
pub mod frame_loop;
pub mod tween;

pub use animator::Animator;
pub use easing::Easing;
pub use frame_loop::LoopHandle;
pub use tween::{TweenHandle, TweenSpec};

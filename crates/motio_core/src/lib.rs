//! Motio Core Timing
//!
//! This crate provides the foundational timing primitives for the Motio
//! animation engine:
//!
//! - **Clocks**: monotonic millisecond time sources, real and scripted
//! - **Frame Scheduling**: the "run once before the next frame" capability
//!   with a deterministic, explicitly pumped implementation
//!
//! Nothing here touches a window system or a display. Embedders implement
//! [`FrameScheduler`] over their own event loop and hand it - together
//! with a [`Clock`] - to the drivers in `motio_animation`.
//!
//! # Example
//!
//! ```rust
//! use motio_core::{Clock, FrameScheduler, ManualClock, ManualScheduler};
//!
//! let clock = ManualClock::new();
//! let scheduler = ManualScheduler::new();
//!
//! let _handle = scheduler.schedule(Box::new(|| {
//!     // runs on the next frame
//! }));
//!
//! clock.advance(16.0);
//! assert_eq!(scheduler.run_frame(), 1);
//! assert_eq!(clock.now_ms(), 16.0);
//! ```

pub mod clock;
pub mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::{FrameCallback, FrameHandle, FrameScheduler, ManualScheduler, SchedulerError};

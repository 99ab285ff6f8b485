//! Core timing primitives for the voxhold gesture runtime.
//!
//! Everything here is single-threaded: a [`Clock`] supplies monotonic
//! milliseconds and a [`TimerScheduler`] queues one-shot and repeating timers
//! whose [`TimerRegistration`] handles cancel on drop.

mod clock;
mod scheduler;

pub use clock::{Clock, ManualClock};
pub use scheduler::{FiredTimer, TimerId, TimerKind, TimerRegistration, TimerScheduler};

//! Standard runtime services backed by Rust's `std` library.
//!
//! This crate provides the wall-clock implementation of
//! [`voxhold_core::Clock`] and a small blocking pump that lets a host without
//! its own event loop wait for the next timer deadline.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use voxhold_core::{Clock, TimerScheduler};
use web_time::Instant;

/// Clock implementation backed by [`web_time::Instant`].
#[derive(Clone, Copy)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Returns the elapsed time since this clock was created.
    pub fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdClock")
            .field("elapsed_millis", &self.now_millis())
            .finish()
    }
}

impl Clock for StdClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Convenience container bundling the standard clock with blocking waits.
#[derive(Clone, Debug, Default)]
pub struct StdRuntime {
    clock: Rc<StdClock>,
}

impl StdRuntime {
    /// Creates a new standard runtime instance.
    pub fn new() -> Self {
        Self {
            clock: Rc::new(StdClock::new()),
        }
    }

    /// Returns the clock implementation.
    pub fn clock(&self) -> Rc<StdClock> {
        Rc::clone(&self.clock)
    }

    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Blocks the current thread until `deadline_millis` on this runtime's clock.
    pub fn sleep_until(&self, deadline_millis: u64) {
        let now = self.clock.now_millis();
        if deadline_millis > now {
            std::thread::sleep(Duration::from_millis(deadline_millis - now));
        }
    }

    /// Sleeps until `until` or the scheduler's next deadline, whichever is first.
    ///
    /// Returns the clock reading after waking.
    pub fn park_until_next<E>(&self, scheduler: &TimerScheduler<E>, until: u64) -> u64 {
        self.park_until(scheduler.next_deadline(), until)
    }

    /// Like [`StdRuntime::park_until_next`], for hosts that only expose the
    /// next deadline (e.g. a controller that owns its scheduler).
    pub fn park_until(&self, next_deadline: Option<u64>, until: u64) -> u64 {
        let target = next_deadline.map_or(until, |deadline| deadline.min(until));
        log::trace!("parking until {target}ms");
        self.sleep_until(target);
        self.clock.now_millis()
    }
}

#[cfg(test)]
#[path = "tests/std_runtime_tests.rs"]
mod tests;

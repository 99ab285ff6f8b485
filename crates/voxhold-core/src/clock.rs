use std::cell::Cell;
use std::rc::Rc;

/// Provides monotonic time for the gesture runtime.
///
/// Timestamps are plain milliseconds since an arbitrary origin chosen by the
/// implementation. Only differences between two readings are meaningful.
pub trait Clock {
    /// Returns the current time in milliseconds.
    fn now_millis(&self) -> u64;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: u64) -> u64 {
        self.now_millis().saturating_sub(since)
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can hold one copy while the
/// controller under test reads another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(millis: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(millis)),
        }
    }

    /// Moves the clock to `millis`. Attempts to go backwards are ignored.
    pub fn set(&self, millis: u64) {
        if millis < self.now.get() {
            log::warn!(
                "ManualClock refused to move backwards from {} to {}",
                self.now.get(),
                millis
            );
            return;
        }
        self.now.set(millis);
    }

    pub fn advance(&self, delta_millis: u64) {
        self.now.set(self.now.get().saturating_add(delta_millis));
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

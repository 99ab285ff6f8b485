//! Single-threaded timer queue with cancel-on-drop registrations.
//!
//! The scheduler never runs callbacks itself. Hosts ask it for due timers with
//! [`TimerScheduler::pop_due`] and dispatch the returned events. Because timers
//! are handed out one at a time, a handler that cancels another timer is
//! honored even when both were due in the same pump.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

// Ids are unique across schedulers so a timer can never be mistaken for one
// armed on a different queue.
static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    Once,
    Repeating { period_millis: u64 },
}

/// A timer whose deadline has passed.
#[derive(Clone, Debug, PartialEq)]
pub struct FiredTimer<E> {
    pub id: TimerId,
    /// The deadline the timer was armed for, not the time it was popped.
    pub deadline_millis: u64,
    pub event: E,
}

struct TimerEntry<E> {
    event: E,
    deadline: u64,
    kind: TimerKind,
}

struct SchedulerInner<E> {
    entries: FxHashMap<TimerId, TimerEntry<E>>,
    // Ordered by deadline, then by arm order.
    queue: BTreeSet<(u64, TimerId)>,
}

impl<E> SchedulerInner<E> {
    fn remove(&mut self, id: TimerId) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => {
                self.queue.remove(&(entry.deadline, id));
                true
            }
            None => false,
        }
    }
}

/// Timer queue handing out [`TimerRegistration`]s.
///
/// Cloning the scheduler clones the handle; all clones share one queue.
pub struct TimerScheduler<E> {
    inner: Rc<RefCell<SchedulerInner<E>>>,
}

impl<E> Clone for TimerScheduler<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> Default for TimerScheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for TimerScheduler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("TimerScheduler")
            .field("pending", &inner.entries.len())
            .field("next_deadline", &inner.queue.first().map(|(d, _)| *d))
            .finish()
    }
}

impl<E> TimerScheduler<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                entries: FxHashMap::default(),
                queue: BTreeSet::new(),
            })),
        }
    }

    /// Arms a one-shot timer firing `delay_millis` after `now_millis`.
    pub fn schedule_once(
        &self,
        now_millis: u64,
        delay_millis: u64,
        event: E,
    ) -> TimerRegistration<E> {
        self.insert(
            now_millis.saturating_add(delay_millis),
            TimerKind::Once,
            event,
        )
    }

    /// Arms a timer firing every `period_millis`, first at `now_millis + period_millis`.
    ///
    /// A zero period is treated as one millisecond so the queue always makes progress.
    pub fn schedule_repeating(
        &self,
        now_millis: u64,
        period_millis: u64,
        event: E,
    ) -> TimerRegistration<E> {
        let period_millis = period_millis.max(1);
        self.insert(
            now_millis.saturating_add(period_millis),
            TimerKind::Repeating { period_millis },
            event,
        )
    }

    fn insert(&self, deadline: u64, kind: TimerKind, event: E) -> TimerRegistration<E> {
        let id = TimerId(NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed));
        let mut inner = self.inner.borrow_mut();
        inner.entries.insert(
            id,
            TimerEntry {
                event,
                deadline,
                kind,
            },
        );
        inner.queue.insert((deadline, id));
        log::trace!("armed {id} for {deadline}ms ({kind:?})");
        TimerRegistration {
            scheduler: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Returns the earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.inner.borrow().queue.first().map(|(deadline, _)| *deadline)
    }

    pub fn pending_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.inner.borrow().entries.contains_key(&id)
    }

    /// Drops every pending timer. Outstanding registrations become inert.
    pub fn cancel_all(&self) -> usize {
        let mut inner = self.inner.borrow_mut();
        let cancelled = inner.entries.len();
        inner.entries.clear();
        inner.queue.clear();
        cancelled
    }
}

impl<E: Clone> TimerScheduler<E> {
    /// Pops the earliest timer due at or before `now_millis`.
    ///
    /// Repeating timers are re-armed at `deadline + period` before being
    /// returned, so a timer that fell behind fires once per missed period.
    pub fn pop_due(&self, now_millis: u64) -> Option<FiredTimer<E>> {
        let mut inner = self.inner.borrow_mut();
        let (deadline, id) = *inner.queue.first()?;
        if deadline > now_millis {
            return None;
        }
        inner.queue.remove(&(deadline, id));

        let kind = inner.entries.get(&id)?.kind;
        let event = match kind {
            TimerKind::Once => inner.entries.remove(&id)?.event,
            TimerKind::Repeating { period_millis } => {
                let next = deadline.saturating_add(period_millis);
                let entry = inner.entries.get_mut(&id)?;
                entry.deadline = next;
                let event = entry.event.clone();
                inner.queue.insert((next, id));
                event
            }
        };

        Some(FiredTimer {
            id,
            deadline_millis: deadline,
            event,
        })
    }
}

/// Handle to an armed timer. Dropping it cancels the timer.
pub struct TimerRegistration<E> {
    scheduler: Weak<RefCell<SchedulerInner<E>>>,
    id: Option<TimerId>,
}

impl<E> TimerRegistration<E> {
    pub fn id(&self) -> Option<TimerId> {
        self.id
    }

    /// Whether the timer is still queued. One-shot timers stop being active
    /// once they have been popped.
    pub fn is_active(&self) -> bool {
        match (self.id, self.scheduler.upgrade()) {
            (Some(id), Some(inner)) => inner.borrow().entries.contains_key(&id),
            _ => false,
        }
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(inner) = self.scheduler.upgrade() {
            if inner.borrow_mut().remove(id) {
                log::trace!("cancelled {id}");
            }
        }
    }
}

impl<E> fmt::Debug for TimerRegistration<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerRegistration")
            .field("id", &self.id)
            .finish()
    }
}

impl<E> Drop for TimerRegistration<E> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "tests/scheduler_tests.rs"]
mod tests;

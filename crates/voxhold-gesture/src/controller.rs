//! Host-facing entry point.
//!
//! The controller owns the clock, the timer queue and at most one
//! [`GestureSession`]. Hosts forward pointer events with
//! [`RecordingController::handle_event`] and call
//! [`RecordingController::pump`] from their timer or frame callback.
//!
//! Event timestamps and the clock are assumed to share one timebase. Timers
//! that fall due before an event's timestamp are dispatched before the event.

use voxhold_core::Clock;
use voxhold_input::{PointerEvent, PointerEventKind, Rect};

use crate::config::{ConfigError, GestureConfig};
use crate::proximity::ProximityTarget;
use crate::session::{GestureSession, SessionScheduler};
use crate::state::{GestureState, RecordingOutcome, SessionSnapshot};
use crate::waveform::Waveform;

pub struct RecordingController<C: Clock> {
    clock: C,
    config: GestureConfig,
    scheduler: SessionScheduler,
    session: Option<GestureSession>,
    target: Option<ProximityTarget>,
    waveform_seed: Option<u64>,
}

impl<C: Clock> RecordingController<C> {
    pub fn new(clock: C, config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            clock,
            config,
            scheduler: SessionScheduler::new(),
            session: None,
            target: None,
            waveform_seed: None,
        })
    }

    /// Makes waveform bars reproducible across sessions.
    pub fn with_waveform_seed(mut self, seed: u64) -> Self {
        self.waveform_seed = Some(seed);
        self
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Registers (or clears) the trash target. Without one, proximity is
    /// never checked.
    pub fn set_target_bounds(&mut self, bounds: Option<Rect>) {
        self.target = bounds.map(ProximityTarget::new);
    }

    pub fn target(&self) -> Option<&ProximityTarget> {
        self.target.as_ref()
    }

    /// Routes one host event. Returns the outcome when the event ends a press.
    pub fn handle_event(&mut self, event: &PointerEvent) -> Option<RecordingOutcome> {
        self.pump_until(event.timestamp_ms);
        match event.kind {
            PointerEventKind::Down => {
                self.press(event);
                None
            }
            PointerEventKind::Move => {
                self.on_move(event);
                None
            }
            PointerEventKind::Up | PointerEventKind::Cancel => self.release_at(event.timestamp_ms),
        }
    }

    /// Starts a new session. A session that is still live is torn down first.
    pub fn press(&mut self, event: &PointerEvent) {
        if let Some(previous) = self.session.take() {
            let outcome = previous.release(event.timestamp_ms);
            log::warn!("press while a session was live, dropped it with {outcome:?}");
        }
        let recording = &self.config.recording;
        let waveform = match self.waveform_seed {
            Some(seed) => Waveform::seeded(recording, seed),
            None => Waveform::new(recording),
        };
        self.session = Some(GestureSession::press(
            event,
            self.config,
            waveform,
            self.target.as_ref(),
            &self.scheduler,
        ));
    }

    fn on_move(&mut self, event: &PointerEvent) {
        match self.session.as_mut() {
            Some(session) => session.on_move(event, self.target.as_ref(), &self.scheduler),
            None => log::trace!("move without a press at {}ms", event.timestamp_ms),
        }
    }

    /// Ends the live session at the current clock time.
    pub fn release(&mut self) -> Option<RecordingOutcome> {
        let now = self.clock.now_millis();
        self.pump_until(now);
        self.release_at(now)
    }

    fn release_at(&mut self, now_ms: u64) -> Option<RecordingOutcome> {
        let outcome = self.session.take().map(|session| session.release(now_ms));
        if outcome.is_none() {
            log::trace!("release without a press at {now_ms}ms");
        }
        outcome
    }

    /// Dispatches every timer due at the current clock time.
    ///
    /// Returns how many timers fired.
    pub fn pump(&mut self) -> usize {
        let now = self.clock.now_millis();
        self.pump_until(now)
    }

    fn pump_until(&mut self, now_ms: u64) -> usize {
        let mut dispatched = 0;
        while let Some(fired) = self.scheduler.pop_due(now_ms) {
            match self.session.as_mut() {
                Some(session) => {
                    session.on_timer(&fired, self.target.as_ref(), &self.scheduler);
                }
                None => log::warn!("{} fired with no live session", fired.id),
            }
            dispatched += 1;
        }
        dispatched
    }

    /// Drops the live session and every pending timer, as on unmount.
    pub fn teardown(&mut self) {
        if self.session.take().is_some() {
            log::debug!("session torn down");
        }
        let leftover = self.scheduler.cancel_all();
        if leftover > 0 {
            log::warn!("{leftover} timers outlived their session");
        }
    }

    pub fn state(&self) -> GestureState {
        let now = self.clock.now_millis();
        self.session
            .as_ref()
            .map_or(GestureState::Idle, |session| session.state(now))
    }

    pub fn snapshot(&self) -> Option<SessionSnapshot<'_>> {
        let now = self.clock.now_millis();
        self.session.as_ref().map(|session| session.snapshot(now))
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_pressed(&self) -> bool {
        self.session.is_some()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

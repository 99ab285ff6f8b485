//! One press-and-hold interaction, from press-start to release.
//!
//! A [`GestureSession`] owns every timer it arms through
//! [`TimerRegistration`]s. Dropping or releasing the session drops them,
//! which removes them from the scheduler, so no timer can fire against a
//! session that no longer exists.

use voxhold_core::{FiredTimer, TimerRegistration, TimerScheduler};
use voxhold_input::velocity_tracker::ASSUME_STOPPED_MS;
use voxhold_input::{DeviceKind, InputSampler, Point, PointerEvent};

use crate::classifier::{classify, ClassifierInput, SwipeDecision};
use crate::config::GestureConfig;
use crate::proximity::ProximityTarget;
use crate::state::{CancelCause, GestureState, RecordingOutcome, SessionSnapshot};
use crate::waveform::Waveform;

/// Timers a session can arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionTimer {
    /// Arm delay elapsed: recording starts.
    Arm,
    /// Swipe cancel was not renewed in time.
    CancelRevert,
    DurationTick,
    WaveformTick,
    /// No move arrived for a while: the pointer is at rest.
    Rest,
}

pub type SessionScheduler = TimerScheduler<SessionTimer>;

type Registration = TimerRegistration<SessionTimer>;

#[derive(Debug, Default)]
struct SessionTimers {
    arm: Option<Registration>,
    cancel_revert: Option<Registration>,
    duration: Option<Registration>,
    waveform: Option<Registration>,
    rest: Option<Registration>,
}

impl SessionTimers {
    fn slot(&self, timer: SessionTimer) -> &Option<Registration> {
        match timer {
            SessionTimer::Arm => &self.arm,
            SessionTimer::CancelRevert => &self.cancel_revert,
            SessionTimer::DurationTick => &self.duration,
            SessionTimer::WaveformTick => &self.waveform,
            SessionTimer::Rest => &self.rest,
        }
    }

    fn owns(&self, fired: &FiredTimer<SessionTimer>) -> bool {
        self.slot(fired.event)
            .as_ref()
            .and_then(|registration| registration.id())
            == Some(fired.id)
    }

    fn active_count(&self) -> usize {
        [
            &self.arm,
            &self.cancel_revert,
            &self.duration,
            &self.waveform,
            &self.rest,
        ]
            .into_iter()
            .filter(|slot| slot.as_ref().is_some_and(|r| r.is_active()))
            .count()
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug)]
pub struct GestureSession {
    config: GestureConfig,
    sampler: InputSampler,
    device: DeviceKind,
    pressed_at_ms: u64,
    recording_since_ms: Option<u64>,
    duration_secs: Option<u32>,
    waveform: Waveform,
    near_target: bool,
    swipe_cancel: bool,
    cursor_scale: f32,
    swipe_progress: f32,
    target_center: Option<Point>,
    timers: SessionTimers,
}

impl GestureSession {
    /// Starts a session at a press-start event and arms the arm-delay timer.
    pub fn press(
        event: &PointerEvent,
        config: GestureConfig,
        waveform: Waveform,
        target: Option<&ProximityTarget>,
        scheduler: &SessionScheduler,
    ) -> Self {
        let mut sampler = InputSampler::new(config.velocity_strategy);
        sampler.begin(event.sample());

        let mut session = Self {
            config,
            sampler,
            device: event.device,
            pressed_at_ms: event.timestamp_ms,
            recording_since_ms: None,
            duration_secs: None,
            waveform,
            near_target: false,
            swipe_cancel: false,
            cursor_scale: config.swipe.cursor_scale_min,
            swipe_progress: 0.0,
            target_center: None,
            timers: SessionTimers::default(),
        };
        session.update_proximity(event.position, target);
        session.timers.arm = Some(scheduler.schedule_once(
            event.timestamp_ms,
            config.recording.arm_delay_ms,
            SessionTimer::Arm,
        ));
        log::debug!(
            "press at ({}, {}) t={}ms via {:?}",
            event.position.x,
            event.position.y,
            event.timestamp_ms,
            event.device
        );
        session
    }

    /// Feeds a move sample.
    ///
    /// Before the arm delay has elapsed only the position is tracked; the
    /// classifier runs once recording has started. Every move restarts the
    /// rest countdown that zeroes the velocity once the pointer goes still.
    pub fn on_move(
        &mut self,
        event: &PointerEvent,
        target: Option<&ProximityTarget>,
        scheduler: &SessionScheduler,
    ) {
        self.device = event.device;
        let velocity = self.sampler.record(event.sample());
        log::trace!(
            "move x={} dx={} v={velocity}",
            event.position.x,
            self.sampler.displacement_x()
        );
        self.timers.rest = None;
        self.timers.rest = Some(scheduler.schedule_once(
            event.timestamp_ms,
            ASSUME_STOPPED_MS,
            SessionTimer::Rest,
        ));
        if !self.is_recording() {
            return;
        }

        self.update_proximity(event.position, target);
        self.apply_motion(velocity, event.timestamp_ms, scheduler);
    }

    fn apply_motion(&mut self, velocity: f32, now_ms: u64, scheduler: &SessionScheduler) {
        let classification = classify(
            &ClassifierInput {
                displacement: self.sampler.displacement_x(),
                velocity,
                device: self.device,
                near_target: self.near_target,
            },
            &self.config.swipe,
        );
        self.cursor_scale = classification.cursor_scale;
        self.swipe_progress = classification.swipe_progress;

        match classification.decision {
            SwipeDecision::Cancel => self.engage_swipe_cancel(now_ms, scheduler),
            SwipeDecision::Reset => self.clear_swipe_cancel(),
            SwipeDecision::Hold => {}
        }
    }

    /// Applies a fired timer. Returns `false` if the timer is not one of ours.
    pub fn on_timer(
        &mut self,
        fired: &FiredTimer<SessionTimer>,
        target: Option<&ProximityTarget>,
        scheduler: &SessionScheduler,
    ) -> bool {
        if !self.timers.owns(fired) {
            log::warn!("ignoring foreign {} ({:?})", fired.id, fired.event);
            return false;
        }
        let now = fired.deadline_millis;

        match fired.event {
            SessionTimer::Arm => {
                self.timers.arm = None;
                self.recording_since_ms = Some(now);
                self.duration_secs = Some(0);
                let recording = self.config.recording;
                self.timers.duration = Some(scheduler.schedule_repeating(
                    now,
                    recording.duration_interval_ms,
                    SessionTimer::DurationTick,
                ));
                self.timers.waveform = Some(scheduler.schedule_repeating(
                    now,
                    recording.waveform_interval_ms,
                    SessionTimer::WaveformTick,
                ));
                if let Some(position) = self.sampler.position() {
                    self.update_proximity(position, target);
                }
                log::debug!("recording started at {now}ms");
            }
            SessionTimer::CancelRevert => {
                self.timers.cancel_revert = None;
                self.swipe_cancel = false;
                log::debug!("swipe cancel expired at {now}ms");
            }
            SessionTimer::DurationTick => {
                let seconds = self.duration_secs.get_or_insert(0);
                *seconds += 1;
            }
            SessionTimer::WaveformTick => {
                self.waveform.push_bar();
            }
            SessionTimer::Rest => {
                self.timers.rest = None;
                self.sampler.settle();
                if self.is_recording() {
                    self.apply_motion(0.0, now, scheduler);
                }
                log::trace!("pointer at rest at {now}ms");
            }
        }
        true
    }

    /// Ends the session. All timers are cancelled before this returns.
    pub fn release(mut self, now_ms: u64) -> RecordingOutcome {
        self.timers.clear();
        let outcome = match self.duration_secs {
            None => RecordingOutcome::Debounced {
                held_ms: now_ms.saturating_sub(self.pressed_at_ms),
            },
            Some(duration_secs) => {
                match CancelCause::from_flags(self.swipe_cancel, self.near_target) {
                    Some(cause) => RecordingOutcome::Discarded {
                        duration_secs,
                        cause,
                    },
                    None => RecordingOutcome::Completed {
                        duration_secs,
                        bars: self.waveform.into_bars(),
                    },
                }
            }
        };
        log::debug!("released at {now_ms}ms: {outcome:?}");
        outcome
    }

    fn engage_swipe_cancel(&mut self, now_ms: u64, scheduler: &SessionScheduler) {
        if !self.swipe_cancel {
            log::debug!("swipe cancel engaged at {now_ms}ms");
        }
        self.swipe_cancel = true;
        // Drop the old countdown before arming its replacement.
        self.timers.cancel_revert = None;
        self.timers.cancel_revert = Some(scheduler.schedule_once(
            now_ms,
            self.config.swipe.auto_reset_delay_ms,
            SessionTimer::CancelRevert,
        ));
    }

    fn clear_swipe_cancel(&mut self) {
        self.timers.cancel_revert = None;
        if self.swipe_cancel {
            log::debug!("swipe cancel reset by recovery");
        }
        self.swipe_cancel = false;
    }

    fn update_proximity(&mut self, pointer: Point, target: Option<&ProximityTarget>) {
        self.target_center = target.map(ProximityTarget::center);
        let near = target.is_some_and(|target| target.is_near(pointer, &self.config.proximity));
        if near != self.near_target {
            log::debug!("near target: {near}");
        }
        self.near_target = near;
    }

    pub fn state(&self, now_ms: u64) -> GestureState {
        let Some(since) = self.recording_since_ms else {
            return GestureState::Idle;
        };
        let elapsed_ms = now_ms.saturating_sub(since);
        let distance = self.sampler.displacement_x();
        match CancelCause::from_flags(self.swipe_cancel, self.near_target) {
            Some(cause) => GestureState::Cancelling {
                elapsed_ms,
                distance,
                cause,
            },
            None => GestureState::Pressing {
                elapsed_ms,
                distance,
            },
        }
    }

    pub fn snapshot(&self, now_ms: u64) -> SessionSnapshot<'_> {
        SessionSnapshot {
            state: self.state(now_ms),
            pointer: self.sampler.position().unwrap_or(Point::ZERO),
            device: self.device,
            cursor_scale: self.cursor_scale,
            swipe_progress: self.swipe_progress,
            near_target: self.near_target,
            swipe_cancel: self.swipe_cancel,
            duration_secs: self.duration_secs,
            bars: self.waveform.bars(),
            target_center: self.target_center,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.recording_since_ms.is_some()
    }

    pub fn device(&self) -> DeviceKind {
        self.device
    }

    pub fn pressed_at_ms(&self) -> u64 {
        self.pressed_at_ms
    }

    pub fn velocity(&self) -> f32 {
        self.sampler.velocity()
    }

    pub fn displacement(&self) -> f32 {
        self.sampler.displacement_x()
    }

    /// Number of this session's timers still queued in the scheduler.
    pub fn active_timers(&self) -> usize {
        self.timers.active_count()
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;

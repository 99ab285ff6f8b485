//! Robot-style driver for recording gestures
//!
//! A [`GestureRobot`] owns a [`ManualClock`] and a [`RecordingController`] and
//! lets a test script a press, swipes, holds and a release in virtual time.
//! Every step pumps due timers, so the controller is always observed in the
//! state a real host would see at that instant.
//!
//! # Example
//!
//! ```
//! use voxhold_testing::GestureRobot;
//!
//! let mut robot = GestureRobot::new();
//! robot.press_at(300.0, 100.0);
//! robot.hold(1_000);
//! robot.swipe_by(-80.0, 0.0, 10, 2);
//! assert!(robot.state().is_cancelling());
//! ```

use voxhold_core::{Clock, ManualClock};
use voxhold_gesture::{
    ConfigError, DeviceKind, GesturePhase, GestureConfig, GestureState, Point, PointerEvent,
    RecordingController, RecordingOutcome, Rect,
};
use voxhold_ui::{map_presentation, AnimationConfig, PresentationParams};

/// Trash icon placement used when a test does not supply one.
pub const DEFAULT_TRASH_BOUNDS: Rect = Rect::new(6.0, 86.0, 28.0, 28.0);

/// Width of the message input the recording bar expands into.
pub const DEFAULT_CONTAINER_WIDTH: f32 = 369.0;

pub struct GestureRobot {
    clock: ManualClock,
    controller: RecordingController<ManualClock>,
    pointer: Point,
    device: DeviceKind,
    animation: AnimationConfig,
    container_width: f32,
    outcomes: Vec<RecordingOutcome>,
}

impl Default for GestureRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRobot {
    /// Default configuration, no trash target, deterministic waveform.
    pub fn new() -> Self {
        match Self::with_config(GestureConfig::default()) {
            Ok(robot) => robot,
            Err(err) => panic!("default gesture config rejected: {err}"),
        }
    }

    pub fn with_config(config: GestureConfig) -> Result<Self, ConfigError> {
        let clock = ManualClock::new();
        let controller = RecordingController::new(clock.clone(), config)?.with_waveform_seed(7);
        Ok(Self {
            clock,
            controller,
            pointer: Point::ZERO,
            device: DeviceKind::Pointer,
            animation: AnimationConfig::default(),
            container_width: DEFAULT_CONTAINER_WIDTH,
            outcomes: Vec::new(),
        })
    }

    /// Registers the trash target.
    pub fn with_trash(mut self, bounds: Rect) -> Self {
        self.controller.set_target_bounds(Some(bounds));
        self
    }

    pub fn with_default_trash(self) -> Self {
        self.with_trash(DEFAULT_TRASH_BOUNDS)
    }

    /// Sends every following event as a touch event.
    pub fn touch(mut self) -> Self {
        self.device = DeviceKind::Touch;
        self
    }

    pub fn now(&self) -> u64 {
        self.clock.now_millis()
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn press_at(&mut self, x: f32, y: f32) {
        self.pointer = Point::new(x, y);
        let event = PointerEvent::down(x, y, self.now());
        self.dispatch(event);
    }

    /// One move at the current time.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.pointer = Point::new(x, y);
        let event = PointerEvent::moved(x, y, self.now());
        self.dispatch(event);
    }

    /// Moves `steps` times, `step_ms` apart, ending `(dx, dy)` from the current
    /// pointer.
    pub fn swipe_by(&mut self, dx: f32, dy: f32, step_ms: u64, steps: u32) {
        let start = self.pointer;
        let steps = steps.max(1);
        for step in 1..=steps {
            self.clock.advance(step_ms);
            let fraction = step as f32 / steps as f32;
            self.move_to(start.x + dx * fraction, start.y + dy * fraction);
        }
    }

    /// Glides to `target` in `steps` moves spread over `duration_ms`.
    pub fn drag_to(&mut self, target: Point, duration_ms: u64, steps: u32) {
        let steps = steps.max(1);
        let delta = target - self.pointer;
        self.swipe_by(delta.x, delta.y, duration_ms / steps as u64, steps);
    }

    /// Lets time pass with the pointer still, firing due timers.
    pub fn hold(&mut self, millis: u64) {
        self.clock.advance(millis);
        self.controller.pump();
    }

    /// Releases at the current pointer position.
    pub fn release(&mut self) -> Option<RecordingOutcome> {
        let event = PointerEvent::up(self.pointer.x, self.pointer.y, self.now());
        self.dispatch(event)
    }

    /// The host cancelled the pointer stream (e.g. touch stolen by a scroll).
    pub fn cancel_pointer(&mut self) -> Option<RecordingOutcome> {
        let event = PointerEvent::cancel(self.now());
        self.dispatch(event)
    }

    fn dispatch(&mut self, event: PointerEvent) -> Option<RecordingOutcome> {
        let outcome = self.controller.handle_event(&event.with_device(self.device));
        if let Some(outcome) = &outcome {
            log::debug!("robot observed {outcome:?}");
            self.outcomes.push(outcome.clone());
        }
        outcome
    }

    pub fn state(&self) -> GestureState {
        self.controller.state()
    }

    pub fn phase(&self) -> GesturePhase {
        self.state().phase()
    }

    pub fn duration_secs(&self) -> Option<u32> {
        self.controller.snapshot().and_then(|s| s.duration_secs)
    }

    pub fn bars(&self) -> Vec<f32> {
        self.controller
            .snapshot()
            .map(|s| s.bars.to_vec())
            .unwrap_or_default()
    }

    pub fn cursor_scale(&self) -> Option<f32> {
        self.controller.snapshot().map(|s| s.cursor_scale)
    }

    /// What the renderer would draw right now.
    pub fn presentation(&self) -> PresentationParams {
        match self.controller.snapshot() {
            Some(snapshot) => map_presentation(&snapshot, self.container_width, &self.animation),
            None => PresentationParams::idle(&self.animation),
        }
    }

    /// Outcomes of every press released so far, oldest first.
    pub fn outcomes(&self) -> &[RecordingOutcome] {
        &self.outcomes
    }

    pub fn pending_timers(&self) -> usize {
        self.controller.pending_timers()
    }

    pub fn controller(&self) -> &RecordingController<ManualClock> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut RecordingController<ManualClock> {
        &mut self.controller
    }
}

//! Drives a [`RecordingController`] through a [`Scenario`] frame by frame.

use voxhold_core::{Clock, ManualClock};
use voxhold_gesture::{
    ConfigError, GestureConfig, Point, ProximityTarget, RecordingController, RecordingOutcome,
    Rect,
};
use voxhold_runtime_std::StdRuntime;
use voxhold_ui::{
    map_presentation, AnimationConfig, ExitTransition, HelpMessage, PresentationParams,
    RecordingAnimator,
};

use crate::scenario::{Action, Scenario};

/// ~60 fps.
pub const FRAME_MS: u64 = 16;

/// Waits for the next interesting instant.
pub trait Pacer {
    /// Returns at `until`, or earlier at `next_timer`. Returns the time on waking.
    fn wait(&mut self, next_timer: Option<u64>, until: u64) -> u64;
}

impl Pacer for StdRuntime {
    fn wait(&mut self, next_timer: Option<u64>, until: u64) -> u64 {
        self.park_until(next_timer, until)
    }
}

/// Jumps a [`ManualClock`] instead of sleeping.
pub struct VirtualPacer {
    clock: ManualClock,
}

impl VirtualPacer {
    pub fn new(clock: ManualClock) -> Self {
        Self { clock }
    }
}

impl Pacer for VirtualPacer {
    fn wait(&mut self, next_timer: Option<u64>, until: u64) -> u64 {
        let now = self.clock.now_millis();
        let target = next_timer.map_or(until, |deadline| deadline.min(until));
        self.clock.set(target.max(now));
        self.clock.now_millis()
    }
}

/// Where the recording UI sits on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub trash: Rect,
    pub container_width: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            trash: Rect::new(6.0, 86.0, 28.0, 28.0),
            container_width: 369.0,
        }
    }
}

#[derive(Debug, Default)]
pub struct PlaybackReport {
    pub outcome: Option<RecordingOutcome>,
    /// Help line each time it changed, starting with the idle one.
    pub help_messages: Vec<HelpMessage>,
    /// Every `mm:ss` label shown.
    pub duration_labels: Vec<String>,
    pub exit: Option<ExitTransition>,
    pub frames: usize,
}

pub struct ScenarioPlayer<C: Clock> {
    controller: RecordingController<C>,
    layout: Layout,
    animation: AnimationConfig,
    animator: RecordingAnimator,
}

impl<C: Clock> ScenarioPlayer<C> {
    pub fn new(clock: C, config: GestureConfig, layout: Layout) -> Result<Self, ConfigError> {
        let mut controller = RecordingController::new(clock, config)?;
        controller.set_target_bounds(Some(layout.trash));
        let animation = AnimationConfig::default();
        Ok(Self {
            controller,
            layout,
            animation,
            animator: RecordingAnimator::new(animation),
        })
    }

    pub fn with_waveform_seed(mut self, seed: u64) -> Self {
        self.controller = self.controller.with_waveform_seed(seed);
        self
    }

    pub fn controller(&self) -> &RecordingController<C> {
        &self.controller
    }

    pub fn play(&mut self, scenario: &Scenario, pacer: &mut impl Pacer) -> PlaybackReport {
        log::info!("scenario '{}': {}", scenario.name, scenario.description);
        let start = self.controller.clock().now_millis();
        let mut report = PlaybackReport::default();
        let mut pointer = Point::ZERO;
        self.render(start, &mut report);

        for step in scenario.steps() {
            let at = start + step.at_ms;
            self.run_until(at, pacer, &mut report);

            if let Action::Press(point) | Action::Move(point) = step.action {
                pointer = point;
            }
            let before = self.presentation();
            let event = scenario.event(step, at, pointer);
            if let Some(outcome) = self.controller.handle_event(&event) {
                log::info!("released: {outcome:?}");
                let trash_center = self.controller.target().map(ProximityTarget::center);
                let exit = ExitTransition::on_release(&before, trash_center, &self.animation);
                log::info!(
                    "exit: {} over {}ms",
                    if exit.is_discard() {
                        "fly into trash"
                    } else {
                        "fade out"
                    },
                    exit.duration_millis()
                );
                report.exit = Some(exit);
                report.outcome = Some(outcome);
            }
            self.render(at, &mut report);
        }

        if let Some(exit) = &report.exit {
            let end = self.controller.clock().now_millis() + exit.duration_millis();
            self.run_until(end, pacer, &mut report);
        }
        report
    }

    fn run_until(&mut self, target: u64, pacer: &mut impl Pacer, report: &mut PlaybackReport) {
        loop {
            let now = self.controller.clock().now_millis();
            if now >= target {
                break;
            }
            let frame = (now + FRAME_MS).min(target);
            let now = pacer.wait(self.controller.next_deadline(), frame);
            self.controller.pump();
            self.render(now, report);
        }
    }

    fn presentation(&self) -> PresentationParams {
        match self.controller.snapshot() {
            Some(snapshot) => {
                map_presentation(&snapshot, self.layout.container_width, &self.animation)
            }
            None => PresentationParams::idle(&self.animation),
        }
    }

    fn render(&mut self, now: u64, report: &mut PlaybackReport) {
        let params = self.presentation();
        self.animator.update(&params);
        self.animator.tick(now);
        report.frames += 1;

        if report.help_messages.last() != Some(&params.help) {
            log::info!("{}", params.help.text());
            report.help_messages.push(params.help);
        }
        if let Some(label) = params.duration_label {
            if report.duration_labels.last() != Some(&label) {
                log::info!("recording {label} ({} bars)", params.bars.len());
                report.duration_labels.push(label);
            }
        }
        log::trace!(
            "frame {now}ms cursor x{:.2} bar {:.0}px lid {:.1}deg",
            self.animator.cursor_scale(),
            self.animator.bar_width(),
            self.animator.lid_rotation()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_pacer_wakes_for_timers_and_never_rewinds() {
        let clock = ManualClock::starting_at(100);
        let mut pacer = VirtualPacer::new(clock.clone());

        assert_eq!(pacer.wait(Some(130), 200), 130);
        assert_eq!(pacer.wait(None, 116), 130);
        assert_eq!(pacer.wait(Some(500), 146), 146);
    }
}

//! Scripted gestures the demo can replay.

use anyhow::bail;
use voxhold_gesture::{DeviceKind, Point, PointerEvent};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Press(Point),
    Move(Point),
    Release,
    /// The host took the pointer stream away mid-gesture.
    CancelStream,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// Offset from the start of the scenario.
    pub at_ms: u64,
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub device: DeviceKind,
    steps: Vec<Step>,
    cursor: Point,
}

impl Scenario {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            device: DeviceKind::Pointer,
            steps: Vec::new(),
            cursor: Point::ZERO,
        }
    }

    pub fn touch(mut self) -> Self {
        self.device = DeviceKind::Touch;
        self
    }

    pub fn press(mut self, at_ms: u64, x: f32, y: f32) -> Self {
        self.cursor = Point::new(x, y);
        let cursor = self.cursor;
        self.push(at_ms, Action::Press(cursor))
    }

    pub fn move_to(mut self, at_ms: u64, x: f32, y: f32) -> Self {
        self.cursor = Point::new(x, y);
        let cursor = self.cursor;
        self.push(at_ms, Action::Move(cursor))
    }

    /// Evenly spaced moves from the current cursor to `target`.
    pub fn glide(mut self, from_ms: u64, to_ms: u64, target: Point, steps: u32) -> Self {
        let start = self.cursor;
        let steps = steps.max(1);
        let span = to_ms.saturating_sub(from_ms);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            let at = from_ms + span * step as u64 / steps as u64;
            self = self.move_to(
                at,
                start.x + (target.x - start.x) * fraction,
                start.y + (target.y - start.y) * fraction,
            );
        }
        self
    }

    pub fn release(self, at_ms: u64) -> Self {
        self.push(at_ms, Action::Release)
    }

    pub fn cancel_stream(self, at_ms: u64) -> Self {
        self.push(at_ms, Action::CancelStream)
    }

    fn push(mut self, at_ms: u64, action: Action) -> Self {
        if let Some(last) = self.steps.last() {
            if at_ms < last.at_ms {
                log::warn!(
                    "{}: step at {at_ms}ms is earlier than {}ms",
                    self.name,
                    last.at_ms
                );
            }
        }
        self.steps.push(Step { at_ms, action });
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Offset of the last step.
    pub fn duration_ms(&self) -> u64 {
        self.steps.last().map_or(0, |step| step.at_ms)
    }

    /// Host event for `step`, stamped at `timestamp_ms`.
    pub fn event(&self, step: &Step, timestamp_ms: u64, last: Point) -> PointerEvent {
        let event = match step.action {
            Action::Press(at) => PointerEvent::down(at.x, at.y, timestamp_ms),
            Action::Move(at) => PointerEvent::moved(at.x, at.y, timestamp_ms),
            Action::Release => PointerEvent::up(last.x, last.y, timestamp_ms),
            Action::CancelStream => PointerEvent::cancel(timestamp_ms),
        };
        event.with_device(self.device)
    }

    /// Every built-in scenario, in display order.
    pub fn all() -> Vec<Scenario> {
        vec![
            Scenario::new("tap", "Quick tap: released before recording starts")
                .press(0, 300.0, 100.0)
                .release(200),
            Scenario::new("send", "Hold still and release: the recording is kept")
                .press(0, 300.0, 100.0)
                .move_to(900, 298.0, 100.0)
                .move_to(1_700, 296.0, 102.0)
                .release(2_600),
            Scenario::new("swipe-cancel", "Flick left while recording, release to discard")
                .press(0, 300.0, 100.0)
                .move_to(1_500, 255.0, 100.0)
                .move_to(1_510, 230.0, 100.0)
                .release(1_600),
            Scenario::new("swipe-recover", "Flick left, then come back right and keep it")
                .press(0, 300.0, 100.0)
                .move_to(1_500, 255.0, 100.0)
                .move_to(1_510, 230.0, 100.0)
                .move_to(1_600, 310.0, 100.0)
                .release(2_500),
            Scenario::new("drag-to-trash", "Slowly drag onto the trash icon and release")
                .press(0, 300.0, 100.0)
                .move_to(1_000, 280.0, 100.0)
                .glide(1_000, 3_000, Point::new(60.0, 100.0), 20)
                .release(3_200),
            Scenario::new("touch-swipe", "A finger flick at the lower touch threshold")
                .touch()
                .press(0, 300.0, 100.0)
                .move_to(1_500, 255.0, 100.0)
                .move_to(1_516, 230.0, 100.0)
                .release(1_700),
            Scenario::new("stolen", "The host cancels the pointer stream mid-recording")
                .press(0, 300.0, 100.0)
                .cancel_stream(1_200),
        ]
    }

    pub fn named(name: &str) -> Option<Scenario> {
        Self::all().into_iter().find(|scenario| scenario.name == name)
    }
}

/// What the command line asked for.
#[derive(Debug, PartialEq)]
pub enum Selection {
    List,
    Run(Vec<Scenario>),
}

/// Parses `[--list | all | NAME...]`. No arguments runs every scenario.
pub fn select(args: &[String]) -> anyhow::Result<Selection> {
    if args.iter().any(|arg| arg == "--list" || arg == "-l") {
        return Ok(Selection::List);
    }
    if args.is_empty() || args.iter().any(|arg| arg == "all") {
        return Ok(Selection::Run(Scenario::all()));
    }

    let mut scenarios = Vec::with_capacity(args.len());
    for name in args {
        if name.starts_with('-') {
            bail!("unknown option '{name}'");
        }
        match Scenario::named(name) {
            Some(scenario) => scenarios.push(scenario),
            None => bail!("unknown scenario '{name}', run with --list to see them"),
        }
    }
    Ok(Selection::Run(scenarios))
}

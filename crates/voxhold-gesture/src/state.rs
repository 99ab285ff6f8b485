use voxhold_input::{DeviceKind, Point};

/// Why a recording is in its cancel state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CancelCause {
    Swipe,
    Proximity,
    SwipeAndProximity,
}

impl CancelCause {
    pub fn from_flags(swipe: bool, near_target: bool) -> Option<Self> {
        match (swipe, near_target) {
            (true, true) => Some(CancelCause::SwipeAndProximity),
            (true, false) => Some(CancelCause::Swipe),
            (false, true) => Some(CancelCause::Proximity),
            (false, false) => None,
        }
    }
}

/// Data-free view of [`GestureState`], handy for comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    Idle,
    Pressing,
    Cancelling,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureState {
    /// No recording: nothing pressed, or the press has not outlasted the arm delay.
    Idle,
    Pressing {
        /// Milliseconds since recording started.
        elapsed_ms: u64,
        /// Horizontal distance from the press origin.
        distance: f32,
    },
    Cancelling {
        elapsed_ms: u64,
        distance: f32,
        cause: CancelCause,
    },
}

impl GestureState {
    pub fn phase(&self) -> GesturePhase {
        match self {
            GestureState::Idle => GesturePhase::Idle,
            GestureState::Pressing { .. } => GesturePhase::Pressing,
            GestureState::Cancelling { .. } => GesturePhase::Cancelling,
        }
    }

    pub fn is_recording(&self) -> bool {
        !matches!(self, GestureState::Idle)
    }

    pub fn is_cancelling(&self) -> bool {
        matches!(self, GestureState::Cancelling { .. })
    }
}

/// Result of ending a press.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordingOutcome {
    /// Released before the arm delay; treated as a tap.
    Debounced { held_ms: u64 },
    /// Released while recording normally: the message is kept.
    Completed { duration_secs: u32, bars: Vec<f32> },
    /// Released while in the cancel state: the message is thrown away.
    Discarded { duration_secs: u32, cause: CancelCause },
}

/// Read-only view of a live session for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSnapshot<'a> {
    pub state: GestureState,
    pub pointer: Point,
    pub device: DeviceKind,
    pub cursor_scale: f32,
    pub swipe_progress: f32,
    pub near_target: bool,
    pub swipe_cancel: bool,
    /// Whole seconds recorded, `None` until the arm delay has passed.
    pub duration_secs: Option<u32>,
    pub bars: &'a [f32],
    pub target_center: Option<Point>,
}

impl SessionSnapshot<'_> {
    pub fn is_recording(&self) -> bool {
        self.duration_secs.is_some()
    }

    pub fn is_cancel(&self) -> bool {
        self.state.is_cancelling()
    }
}

//! Assertion utilities for gesture robot tests

use voxhold_gesture::{GesturePhase, RecordingOutcome};

use crate::robot::GestureRobot;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_phase(robot: &GestureRobot, expected: GesturePhase, msg: &str) {
    let state = robot.state();
    assert_eq!(
        state.phase(),
        expected,
        "{} at t={}ms: state was {:?}",
        msg,
        robot.now(),
        state
    );
}

/// Assert every waveform bar lies in `[min, max)`.
pub fn assert_bars_in_range(bars: &[f32], min: f32, max: f32, msg: &str) {
    for (index, bar) in bars.iter().enumerate() {
        assert!(
            (min..max).contains(bar),
            "{}: bar {} = {} outside [{}, {})",
            msg,
            index,
            bar,
            min,
            max
        );
    }
}

pub fn assert_no_pending_timers(robot: &GestureRobot, msg: &str) {
    assert_eq!(
        robot.pending_timers(),
        0,
        "{}: timers still queued at t={}ms",
        msg,
        robot.now()
    );
}

/// Assert the press ended as a discarded recording.
pub fn assert_discarded(outcome: Option<&RecordingOutcome>, msg: &str) {
    assert!(
        matches!(outcome, Some(RecordingOutcome::Discarded { .. })),
        "{}: expected a discarded recording, got {:?}",
        msg,
        outcome
    );
}

/// Assert the press ended as a kept recording.
pub fn assert_completed(outcome: Option<&RecordingOutcome>, msg: &str) {
    assert!(
        matches!(outcome, Some(RecordingOutcome::Completed { .. })),
        "{}: expected a completed recording, got {:?}",
        msg,
        outcome
    );
}

//! Swipe-to-cancel classification.
//!
//! [`classify`] is a pure function of one motion sample. The hysteresis (the
//! auto-revert countdown) lives in [`crate::GestureSession`], which applies the
//! returned [`SwipeDecision`].

use voxhold_input::DeviceKind;

use crate::config::SwipeConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierInput {
    /// Horizontal displacement from the press origin, negative is leftwards.
    pub displacement: f32,
    /// Horizontal velocity in px/s.
    pub velocity: f32,
    pub device: DeviceKind,
    /// Whether the pointer is currently within range of the trash target.
    pub near_target: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDecision {
    /// Both displacement and velocity crossed their cancel thresholds.
    Cancel,
    /// The pointer came back right of the reset line.
    Reset,
    /// Neither; any pending cancel keeps counting down.
    Hold,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    /// `max(distance progress, velocity progress)`, in `0.0..=1.0`.
    pub swipe_progress: f32,
    /// Continuous cursor scale for the presentation layer.
    pub cursor_scale: f32,
    pub decision: SwipeDecision,
    /// Proximity forces the cancel look independently of `decision`.
    pub forces_cancel: bool,
}

fn progress(value: f32, threshold: f32) -> f32 {
    let threshold = threshold.abs();
    if threshold <= f32::EPSILON {
        return 1.0;
    }
    (value.abs() / threshold).clamp(0.0, 1.0)
}

pub fn classify(input: &ClassifierInput, config: &SwipeConfig) -> Classification {
    let velocity_threshold = config.velocity_threshold(input.device);

    let distance_progress = progress(input.displacement, config.cancel_distance_px);
    let velocity_progress = progress(input.velocity, velocity_threshold);
    let swipe_progress = distance_progress.max(velocity_progress);

    let cursor_scale = if input.velocity.abs() < config.scale_reset_velocity_px_s {
        config.cursor_scale_min
    } else {
        config.cursor_scale_min + (config.cursor_scale_max - config.cursor_scale_min) * swipe_progress
    };

    // Recovery is checked first. With a valid config the two bands are
    // disjoint, so the order only matters for hand-built thresholds.
    let decision = if input.displacement > config.reset_distance_px {
        SwipeDecision::Reset
    } else if input.displacement < config.cancel_distance_px && input.velocity < velocity_threshold {
        SwipeDecision::Cancel
    } else {
        SwipeDecision::Hold
    };

    Classification {
        swipe_progress,
        cursor_scale,
        decision,
        forces_cancel: input.near_target,
    }
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;

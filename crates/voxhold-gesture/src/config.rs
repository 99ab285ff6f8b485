//! Thresholds and timings for the recording gesture.
//!
//! All distances are logical pixels and all velocities logical pixels per
//! second. Negative values point left: the cancel swipe moves towards the
//! trash target on the leading edge of the recording bar.

use std::fmt;

use voxhold_input::{DeviceKind, VelocityStrategy};

/// Hold time before a press turns into a recording.
///
/// Shorter presses are treated as taps and never leave `Idle`.
pub const ARM_DELAY_MS: u64 = 400;

/// How often a new waveform bar is appended while recording.
pub const WAVEFORM_INTERVAL_MS: u64 = 250;

/// How often the elapsed duration counter ticks.
pub const DURATION_INTERVAL_MS: u64 = 1_000;

pub const MIN_BAR_HEIGHT: f32 = 4.0;
pub const MAX_BAR_HEIGHT: f32 = 24.0;

/// Leftward displacement the pointer must exceed to cancel.
pub const CANCEL_DISTANCE_PX: f32 = -60.0;

/// Leftward velocity a mouse or pen must exceed to cancel.
pub const CANCEL_VELOCITY_PX_S: f32 = -2_000.0;

/// Leftward velocity a finger must exceed to cancel. Half the pointer value.
pub const CANCEL_VELOCITY_TOUCH_PX_S: f32 = -1_000.0;

/// Displacement above which a pending cancel is dropped immediately.
///
/// Sits 10 px to the right of [`CANCEL_DISTANCE_PX`] so a pointer resting on
/// the boundary does not flicker between states.
pub const RESET_DISTANCE_PX: f32 = -50.0;

/// Lifetime of a swipe cancel that is not renewed by another fast swipe.
pub const AUTO_RESET_DELAY_MS: u64 = 500;

/// Below this speed the pointer counts as resting and the cursor shrinks back.
pub const SCALE_RESET_VELOCITY_PX_S: f32 = 100.0;

pub const CURSOR_SCALE_MIN: f32 = 1.0;
pub const CURSOR_SCALE_MAX: f32 = 1.25;

/// Radius around the trash target's center that counts as "over the trash".
pub const TARGET_RADIUS_PX: f32 = 64.0;

/// Timings of the recording itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordingConfig {
    pub arm_delay_ms: u64,
    pub waveform_interval_ms: u64,
    pub duration_interval_ms: u64,
    pub min_bar_height: f32,
    pub max_bar_height: f32,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            arm_delay_ms: ARM_DELAY_MS,
            waveform_interval_ms: WAVEFORM_INTERVAL_MS,
            duration_interval_ms: DURATION_INTERVAL_MS,
            min_bar_height: MIN_BAR_HEIGHT,
            max_bar_height: MAX_BAR_HEIGHT,
        }
    }
}

/// Swipe-to-cancel thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    pub cancel_distance_px: f32,
    pub cancel_velocity_px_s: f32,
    pub cancel_velocity_touch_px_s: f32,
    pub reset_distance_px: f32,
    pub auto_reset_delay_ms: u64,
    pub scale_reset_velocity_px_s: f32,
    pub cursor_scale_min: f32,
    pub cursor_scale_max: f32,
}

impl SwipeConfig {
    /// Velocity the swipe must drop below for `device`.
    pub fn velocity_threshold(&self, device: DeviceKind) -> f32 {
        match device {
            DeviceKind::Pointer => self.cancel_velocity_px_s,
            DeviceKind::Touch => self.cancel_velocity_touch_px_s,
        }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            cancel_distance_px: CANCEL_DISTANCE_PX,
            cancel_velocity_px_s: CANCEL_VELOCITY_PX_S,
            cancel_velocity_touch_px_s: CANCEL_VELOCITY_TOUCH_PX_S,
            reset_distance_px: RESET_DISTANCE_PX,
            auto_reset_delay_ms: AUTO_RESET_DELAY_MS,
            scale_reset_velocity_px_s: SCALE_RESET_VELOCITY_PX_S,
            cursor_scale_min: CURSOR_SCALE_MIN,
            cursor_scale_max: CURSOR_SCALE_MAX,
        }
    }
}

/// Drag-to-trash detection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityConfig {
    pub radius_px: f32,
    /// Offset added to both pointer coordinates before measuring, for hosts
    /// whose reported position is not the cursor's visual hotspot.
    pub hotspot_offset_px: f32,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            radius_px: TARGET_RADIUS_PX,
            hotspot_offset_px: 0.0,
        }
    }
}

/// Complete configuration of a [`crate::RecordingController`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureConfig {
    pub recording: RecordingConfig,
    pub swipe: SwipeConfig,
    pub proximity: ProximityConfig,
    pub velocity_strategy: VelocityStrategy,
}

impl GestureConfig {
    pub fn with_recording(mut self, recording: RecordingConfig) -> Self {
        self.recording = recording;
        self
    }

    pub fn with_swipe(mut self, swipe: SwipeConfig) -> Self {
        self.swipe = swipe;
        self
    }

    pub fn with_proximity(mut self, proximity: ProximityConfig) -> Self {
        self.proximity = proximity;
        self
    }

    pub fn with_velocity_strategy(mut self, strategy: VelocityStrategy) -> Self {
        self.velocity_strategy = strategy;
        self
    }

    /// Checks that thresholds point the right way and timings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let swipe = &self.swipe;
        for (name, value) in [
            ("cancel_distance_px", swipe.cancel_distance_px),
            ("cancel_velocity_px_s", swipe.cancel_velocity_px_s),
            ("cancel_velocity_touch_px_s", swipe.cancel_velocity_touch_px_s),
        ] {
            if !(value < 0.0) {
                return Err(ConfigError::ThresholdNotNegative { name, value });
            }
        }
        if !(swipe.reset_distance_px > swipe.cancel_distance_px) {
            return Err(ConfigError::ResetNotAboveCancel {
                reset: swipe.reset_distance_px,
                cancel: swipe.cancel_distance_px,
            });
        }
        if !(swipe.cursor_scale_min <= swipe.cursor_scale_max) {
            return Err(ConfigError::InvertedRange {
                name: "cursor_scale",
                min: swipe.cursor_scale_min,
                max: swipe.cursor_scale_max,
            });
        }
        if !(swipe.scale_reset_velocity_px_s >= 0.0) {
            return Err(ConfigError::NotPositive {
                name: "scale_reset_velocity_px_s",
                value: swipe.scale_reset_velocity_px_s,
            });
        }

        let recording = &self.recording;
        for (name, value) in [
            ("waveform_interval_ms", recording.waveform_interval_ms),
            ("duration_interval_ms", recording.duration_interval_ms),
            ("auto_reset_delay_ms", swipe.auto_reset_delay_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroInterval { name });
            }
        }
        if !(recording.min_bar_height > 0.0 && recording.min_bar_height < recording.max_bar_height)
        {
            return Err(ConfigError::InvertedRange {
                name: "bar_height",
                min: recording.min_bar_height,
                max: recording.max_bar_height,
            });
        }

        if !(self.proximity.radius_px > 0.0) {
            return Err(ConfigError::NotPositive {
                name: "radius_px",
                value: self.proximity.radius_px,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ThresholdNotNegative { name: &'static str, value: f32 },
    ResetNotAboveCancel { reset: f32, cancel: f32 },
    ZeroInterval { name: &'static str },
    InvertedRange { name: &'static str, min: f32, max: f32 },
    NotPositive { name: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ThresholdNotNegative { name, value } => {
                write!(f, "{name} must be negative (leftward), got {value}")
            }
            ConfigError::ResetNotAboveCancel { reset, cancel } => {
                write!(
                    f,
                    "reset distance {reset} must lie right of cancel distance {cancel}"
                )
            }
            ConfigError::ZeroInterval { name } => write!(f, "{name} must be non-zero"),
            ConfigError::InvertedRange { name, min, max } => {
                write!(f, "{name} range is inverted or empty: {min}..{max}")
            }
            ConfigError::NotPositive { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GestureConfig::default().validate(), Ok(()));
    }

    #[test]
    fn touch_threshold_is_half_of_pointer() {
        let swipe = SwipeConfig::default();
        assert_eq!(
            swipe.velocity_threshold(DeviceKind::Touch) * 2.0,
            swipe.velocity_threshold(DeviceKind::Pointer)
        );
    }

    #[test]
    fn positive_cancel_distance_is_rejected() {
        let config = GestureConfig::default().with_swipe(SwipeConfig {
            cancel_distance_px: 60.0,
            ..SwipeConfig::default()
        });
        assert_eq!(
            config.validate(),
            Err(ConfigError::ThresholdNotNegative {
                name: "cancel_distance_px",
                value: 60.0
            })
        );
    }

    #[test]
    fn overlapping_reset_band_is_rejected() {
        let config = GestureConfig::default().with_swipe(SwipeConfig {
            reset_distance_px: -70.0,
            ..SwipeConfig::default()
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ResetNotAboveCancel { .. })
        ));
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let config = GestureConfig::default().with_recording(RecordingConfig {
            waveform_interval_ms: 0,
            ..RecordingConfig::default()
        });
        let error = config.validate().unwrap_err();
        assert_eq!(error.to_string(), "waveform_interval_ms must be non-zero");
    }

    #[test]
    fn nan_radius_is_rejected() {
        let config = GestureConfig::default().with_proximity(ProximityConfig {
            radius_px: f32::NAN,
            ..ProximityConfig::default()
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { name: "radius_px", .. })
        ));
    }
}

//! Pure mapping from session state to what the renderer draws.
//!
//! Nothing here holds state. [`map_presentation`] can be called every frame;
//! [`crate::RecordingAnimator`] turns its targets into smooth values.

use voxhold_animation::SpringSpec;
use voxhold_gesture::SessionSnapshot;
use voxhold_input::Point;

use crate::color::Color;
use crate::format::format_duration;

/// Cursor bubble diameter at scale 1.0.
pub const CURSOR_SIZE_PX: f32 = 32.0;

/// Host pointer coordinates sit this far below and right of the drawn hotspot.
pub const CURSOR_HOTSPOT_PX: f32 = 8.0;

pub const RECORDING_WIDTH_ORIGIN_PX: f32 = 40.0;
pub const RECORDING_SCALE_ORIGIN: f32 = 0.6;

pub const TRASH_LID_CANCEL_DEG: f32 = -15.0;

pub const CURSOR_FLY_MS: u64 = 200;
pub const CURSOR_FADE_MS: u64 = 300;
pub const RECORDING_EXIT_MS: u64 = 150;
pub const TRASH_DELETE_MS: u64 = 1_500;

/// Sizes, timings and springs of the recording UI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub cursor_size_px: f32,
    pub cursor_hotspot_px: f32,
    /// Cursor scale while cancelling, whatever the swipe progress.
    pub cursor_cancel_scale: f32,
    pub cursor_spring: SpringSpec,
    pub recording_width_origin_px: f32,
    pub recording_scale_origin: f32,
    pub recording_spring: SpringSpec,
    pub recording_exit_ms: u64,
    pub trash_lid_cancel_deg: f32,
    pub trash_lid_spring: SpringSpec,
    pub trash_enter_spring: SpringSpec,
    pub cursor_fly_ms: u64,
    pub cursor_fade_ms: u64,
    pub trash_delete_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            cursor_size_px: CURSOR_SIZE_PX,
            cursor_hotspot_px: CURSOR_HOTSPOT_PX,
            cursor_cancel_scale: voxhold_gesture::config::CURSOR_SCALE_MAX,
            cursor_spring: SpringSpec::from_stiffness_damping(400.0, 30.0),
            recording_width_origin_px: RECORDING_WIDTH_ORIGIN_PX,
            recording_scale_origin: RECORDING_SCALE_ORIGIN,
            recording_spring: SpringSpec::from_stiffness_damping(400.0, 30.0),
            recording_exit_ms: RECORDING_EXIT_MS,
            trash_lid_cancel_deg: TRASH_LID_CANCEL_DEG,
            trash_lid_spring: SpringSpec::from_stiffness_damping(300.0, 20.0),
            trash_enter_spring: SpringSpec::from_stiffness_damping(600.0, 20.0),
            cursor_fly_ms: CURSOR_FLY_MS,
            cursor_fade_ms: CURSOR_FADE_MS,
            trash_delete_ms: TRASH_DELETE_MS,
        }
    }
}

impl AnimationConfig {
    /// Distance from the host pointer to the cursor's top-left corner.
    pub fn cursor_offset_px(&self) -> f32 {
        self.cursor_hotspot_px + self.cursor_size_px / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HelpMessage {
    ReleaseToCancel,
    SwipeLeftToCancel,
    PressAndHold,
}

impl HelpMessage {
    pub fn for_state(is_recording: bool, is_cancel: bool) -> Self {
        if is_cancel {
            HelpMessage::ReleaseToCancel
        } else if is_recording {
            HelpMessage::SwipeLeftToCancel
        } else {
            HelpMessage::PressAndHold
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            HelpMessage::ReleaseToCancel => "Release to cancel",
            HelpMessage::SwipeLeftToCancel => "Swipe left to cancel",
            HelpMessage::PressAndHold => "Press and hold to record",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorParams {
    pub visible: bool,
    /// Top-left corner of the unscaled cursor.
    pub origin: Point,
    pub scale: f32,
    pub background: Color,
    pub foreground: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordingBarParams {
    pub visible: bool,
    pub width_px: f32,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrashParams {
    pub visible: bool,
    pub color: Color,
    pub lid_rotation_deg: f32,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PresentationParams {
    pub is_cancel: bool,
    pub cursor: CursorParams,
    pub recording_bar: RecordingBarParams,
    pub trash: TrashParams,
    pub help: HelpMessage,
    /// `mm:ss`, present while recording.
    pub duration_label: Option<String>,
    pub bars: Vec<f32>,
}

impl PresentationParams {
    /// Nothing pressed.
    pub fn idle(config: &AnimationConfig) -> Self {
        Self {
            is_cancel: false,
            cursor: CursorParams {
                visible: false,
                origin: Point::ZERO,
                scale: 1.0,
                background: Color::STONE_200,
                foreground: Color::STONE_400,
            },
            recording_bar: RecordingBarParams {
                visible: false,
                width_px: config.recording_width_origin_px,
                scale: config.recording_scale_origin,
            },
            trash: TrashParams {
                visible: false,
                color: Color::STONE_400,
                lid_rotation_deg: 0.0,
            },
            help: HelpMessage::PressAndHold,
            duration_label: None,
            bars: Vec::new(),
        }
    }
}

/// Maps a live session to its visual parameters.
///
/// `container_width_px` is the width the recording bar expands to.
pub fn map_presentation(
    snapshot: &SessionSnapshot<'_>,
    container_width_px: f32,
    config: &AnimationConfig,
) -> PresentationParams {
    let is_recording = snapshot.is_recording();
    let is_cancel = is_recording && (snapshot.near_target || snapshot.swipe_cancel);
    let offset = config.cursor_offset_px();

    let cursor = CursorParams {
        visible: is_recording,
        origin: snapshot.pointer.offset(-offset, -offset),
        scale: if is_cancel {
            config.cursor_cancel_scale
        } else {
            snapshot.cursor_scale
        },
        background: if is_cancel {
            Color::RED_500
        } else {
            Color::STONE_200
        },
        foreground: if is_cancel {
            Color::WHITE
        } else {
            Color::STONE_400
        },
    };

    let recording_bar = if is_recording {
        RecordingBarParams {
            visible: true,
            width_px: container_width_px.max(config.recording_width_origin_px),
            scale: 1.0,
        }
    } else {
        RecordingBarParams {
            visible: false,
            width_px: config.recording_width_origin_px,
            scale: config.recording_scale_origin,
        }
    };

    let trash = TrashParams {
        visible: is_recording,
        color: if is_cancel {
            Color::RED_500
        } else {
            Color::STONE_400
        },
        lid_rotation_deg: if is_cancel {
            config.trash_lid_cancel_deg
        } else {
            0.0
        },
    };

    PresentationParams {
        is_cancel,
        cursor,
        recording_bar,
        trash,
        help: HelpMessage::for_state(is_recording, is_cancel),
        duration_label: snapshot.duration_secs.map(format_duration),
        bars: snapshot.bars.to_vec(),
    }
}

#[cfg(test)]
#[path = "tests/presentation_tests.rs"]
mod tests;

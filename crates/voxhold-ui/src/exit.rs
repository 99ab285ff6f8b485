//! What plays after the pointer is released.

use voxhold_animation::{Easing, Keyframes, Lerp, TweenSpec};
use voxhold_input::Point;

use crate::presentation::{AnimationConfig, PresentationParams};

/// Cursor exit chosen at release time.
#[derive(Clone, Debug, PartialEq)]
pub enum ExitTransition {
    /// Cancelled: the cursor shrinks into the trash, which plays its delete
    /// sequence.
    FlyToTrash {
        from: Point,
        to: Point,
        tween: TweenSpec,
        trash: TrashDeleteSequence,
    },
    /// Kept, or cancelled with no trash on screen: the cursor shrinks in place.
    FadeOut { at: Point, tween: TweenSpec },
}

/// One frame of the cursor exit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorExitFrame {
    pub origin: Point,
    pub scale: f32,
    pub opacity: f32,
}

impl ExitTransition {
    /// Picks the exit for the last frame before release.
    ///
    /// `trash_center` is the trash icon's center in the same coordinate space
    /// as the cursor.
    pub fn on_release(
        last: &PresentationParams,
        trash_center: Option<Point>,
        config: &AnimationConfig,
    ) -> Self {
        let from = last.cursor.origin;
        match trash_center.filter(|_| last.is_cancel) {
            Some(center) => {
                let half = config.cursor_size_px / 2.0;
                ExitTransition::FlyToTrash {
                    from,
                    to: center.offset(-half, -half),
                    tween: TweenSpec::new(config.cursor_fly_ms, Easing::EaseInOut),
                    trash: TrashDeleteSequence::new(config),
                }
            }
            None => {
                if last.is_cancel {
                    log::debug!("cancelled with no trash on screen, fading out in place");
                }
                ExitTransition::FadeOut {
                    at: from,
                    tween: TweenSpec::new(config.cursor_fade_ms, Easing::EaseInOut),
                }
            }
        }
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, ExitTransition::FlyToTrash { .. })
    }

    /// Longest running part of the exit.
    pub fn duration_millis(&self) -> u64 {
        match self {
            ExitTransition::FlyToTrash { tween, trash, .. } => {
                tween.duration_millis.max(trash.duration_millis())
            }
            ExitTransition::FadeOut { tween, .. } => tween.duration_millis,
        }
    }

    /// Cursor at `elapsed_ms` after release. Scale and opacity both run to 0.
    pub fn cursor_frame(&self, elapsed_ms: u64) -> CursorExitFrame {
        let (from, to, tween) = match self {
            ExitTransition::FlyToTrash { from, to, tween, .. } => (*from, *to, tween),
            ExitTransition::FadeOut { at, tween } => (*at, *at, tween),
        };
        let linear = if tween.duration_millis == 0 {
            1.0
        } else {
            (elapsed_ms as f32 / tween.duration_millis as f32).clamp(0.0, 1.0)
        };
        let eased = tween.easing.transform(linear);
        CursorExitFrame {
            origin: Point::new(from.x.lerp(&to.x, eased), from.y.lerp(&to.y, eased)),
            scale: 1.0 - eased,
            opacity: 1.0 - eased,
        }
    }
}

/// Trash icon frame during the delete sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrashFrame {
    pub scale: f32,
    pub lid_rotation_deg: f32,
    pub opacity: f32,
}

/// Pop, hold with the lid open, then vanish.
#[derive(Clone, Debug, PartialEq)]
pub struct TrashDeleteSequence {
    scale: Keyframes,
    lid: Keyframes,
    opacity: Keyframes,
}

const DELETE_TIMES: [f32; 4] = [0.0, 0.2, 0.8, 1.0];

impl TrashDeleteSequence {
    pub fn new(config: &AnimationConfig) -> Self {
        let track = |values: Vec<f32>| {
            Keyframes::new(values, config.trash_delete_ms)
                .with_times(DELETE_TIMES.to_vec())
                .with_easing(Easing::BackOut)
        };
        let lid = config.trash_lid_cancel_deg;
        Self {
            scale: track(vec![1.0, 1.3, 1.3, 0.0]),
            lid: track(vec![0.0, lid, lid, lid]),
            opacity: track(vec![1.0, 1.0, 1.0, 0.0]),
        }
    }

    pub fn duration_millis(&self) -> u64 {
        self.scale.duration_millis
    }

    pub fn frame(&self, elapsed_ms: u64) -> TrashFrame {
        TrashFrame {
            scale: self.scale.sample(elapsed_ms),
            lid_rotation_deg: self.lid.sample(elapsed_ms),
            opacity: self.opacity.sample(elapsed_ms).clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
#[path = "tests/exit_tests.rs"]
mod tests;

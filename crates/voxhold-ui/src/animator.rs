//! Smooths presentation targets frame by frame.
//!
//! Like a blinking text cursor, the animator only asks for frames while one
//! of its values is still moving: [`RecordingAnimator::tick`] returns `false`
//! once everything has settled, and the host can stop redrawing.

use voxhold_animation::{AnimatedFloat, AnimationType, TweenSpec};

use crate::presentation::{AnimationConfig, PresentationParams};

pub struct RecordingAnimator {
    config: AnimationConfig,
    cursor_scale: AnimatedFloat,
    bar_width: AnimatedFloat,
    bar_scale: AnimatedFloat,
    bar_opacity: AnimatedFloat,
    lid_rotation: AnimatedFloat,
}

impl RecordingAnimator {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            cursor_scale: AnimatedFloat::new(1.0),
            bar_width: AnimatedFloat::new(config.recording_width_origin_px),
            bar_scale: AnimatedFloat::new(config.recording_scale_origin),
            bar_opacity: AnimatedFloat::new(0.0),
            lid_rotation: AnimatedFloat::new(0.0),
        }
    }

    /// Retargets every value at the latest parameters. Cheap when nothing changed.
    pub fn update(&mut self, params: &PresentationParams) {
        let config = self.config;
        let cursor = AnimationType::Spring(config.cursor_spring);
        let lid = AnimationType::Spring(config.trash_lid_spring);

        if params.cursor.visible {
            retarget(&mut self.cursor_scale, params.cursor.scale, cursor);
        } else {
            self.cursor_scale.snap_to(1.0);
        }
        retarget(&mut self.lid_rotation, params.trash.lid_rotation_deg, lid);

        let bar = params.recording_bar;
        if bar.visible {
            let spring = AnimationType::Spring(config.recording_spring);
            retarget(&mut self.bar_width, bar.width_px, spring);
            retarget(&mut self.bar_scale, bar.scale, spring);
            retarget(&mut self.bar_opacity, 1.0, spring);
        } else {
            // Collapses together, opacity slightly later.
            let exit = AnimationType::Tween(TweenSpec::linear(config.recording_exit_ms));
            let fade = AnimationType::Tween(
                TweenSpec::linear(config.recording_exit_ms).with_delay(config.recording_exit_ms / 2),
            );
            retarget(&mut self.bar_width, bar.width_px, exit);
            retarget(&mut self.bar_scale, bar.scale, exit);
            retarget(&mut self.bar_opacity, 0.0, fade);
        }
    }

    /// Advances all values to `frame_time_ms`. Returns whether another frame is needed.
    pub fn tick(&mut self, frame_time_ms: u64) -> bool {
        let mut running = false;
        for value in [
            &mut self.cursor_scale,
            &mut self.bar_width,
            &mut self.bar_scale,
            &mut self.bar_opacity,
            &mut self.lid_rotation,
        ] {
            running |= value.tick(frame_time_ms);
        }
        running
    }

    pub fn is_animating(&self) -> bool {
        [
            &self.cursor_scale,
            &self.bar_width,
            &self.bar_scale,
            &self.bar_opacity,
            &self.lid_rotation,
        ]
        .into_iter()
        .any(AnimatedFloat::is_running)
    }

    pub fn cursor_scale(&self) -> f32 {
        self.cursor_scale.value()
    }

    pub fn bar_width(&self) -> f32 {
        self.bar_width.value()
    }

    pub fn bar_scale(&self) -> f32 {
        self.bar_scale.value()
    }

    pub fn bar_opacity(&self) -> f32 {
        self.bar_opacity.value()
    }

    pub fn lid_rotation(&self) -> f32 {
        self.lid_rotation.value()
    }
}

/// Only restarts the animation when the target actually moved.
fn retarget(value: &mut AnimatedFloat, target: f32, animation: AnimationType) {
    if (value.target() - target).abs() > f32::EPSILON {
        value.animate_to(target, animation);
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;

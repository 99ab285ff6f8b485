//! Frame-driven value animation.
//!
//! [`AnimatedFloat`] is advanced explicitly with [`AnimatedFloat::tick`] from
//! the host's frame callback; it owns no timers of its own.

use crate::easing::{Easing, Lerp};

/// Time-based animation: duration, easing and optional delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl TweenSpec {
    pub fn new(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::new(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::new(300, Easing::EaseInOut)
    }
}

/// Spring animation configuration (unit mass).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, below bounces, above creeps.
    pub damping_ratio: f32,
    pub stiffness: f32,
    /// Speed (units/s) below which the spring may settle.
    pub velocity_threshold: f32,
    /// Distance from target below which the spring may settle.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    /// Builds a spring from absolute stiffness and damping coefficients, the
    /// way web motion libraries describe them.
    pub fn from_stiffness_damping(stiffness: f32, damping: f32) -> Self {
        let stiffness = stiffness.max(f32::EPSILON);
        Self::new(damping / (2.0 * stiffness.sqrt()), stiffness)
    }

    /// Damping coefficient `c` in `F = -k x - c v`.
    pub fn damping(&self) -> f32 {
        2.0 * self.damping_ratio * self.stiffness.sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::new(1.0, 1500.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(TweenSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Spring(SpringSpec::default())
    }
}

/// Piecewise-linear keyframe track with per-segment easing.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    values: Vec<f32>,
    /// Offsets in `[0, 1]`, one per value, ascending.
    times: Vec<f32>,
    pub duration_millis: u64,
    pub easing: Easing,
}

impl Keyframes {
    /// Values spread evenly over the duration.
    pub fn new(values: Vec<f32>, duration_millis: u64) -> Self {
        let last = values.len().saturating_sub(1).max(1) as f32;
        let times = (0..values.len()).map(|i| i as f32 / last).collect();
        Self {
            values,
            times,
            duration_millis,
            easing: Easing::Linear,
        }
    }

    /// Explicit offsets. Mismatched lengths fall back to even spacing.
    pub fn with_times(mut self, times: Vec<f32>) -> Self {
        if times.len() == self.values.len() {
            self.times = times;
        } else {
            log::warn!(
                "{} keyframe times for {} values; keeping even spacing",
                times.len(),
                self.values.len()
            );
        }
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Value at `elapsed_millis` into the track.
    pub fn sample(&self, elapsed_millis: u64) -> f32 {
        let Some(&first) = self.values.first() else {
            return 0.0;
        };
        let progress = if self.duration_millis == 0 {
            1.0
        } else {
            (elapsed_millis as f32 / self.duration_millis as f32).clamp(0.0, 1.0)
        };

        for (index, pair) in self.times.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            if progress <= to {
                let span = to - from;
                let local = if span <= f32::EPSILON {
                    1.0
                } else {
                    ((progress - from) / span).clamp(0.0, 1.0)
                };
                return self.values[index].lerp(&self.values[index + 1], self.easing.transform(local));
            }
        }
        self.values.last().copied().unwrap_or(first)
    }
}

/// A float that animates toward a target one frame at a time.
#[derive(Debug, Clone)]
pub struct AnimatedFloat {
    current: f32,
    start: f32,
    target: f32,
    /// Units per second.
    velocity: f32,
    animation: AnimationType,
    started_at_ms: Option<u64>,
    last_frame_ms: Option<u64>,
    running: bool,
}

/// Spring integration step, ~60 fps.
const SPRING_STEP_SECONDS: f32 = 0.016;

impl AnimatedFloat {
    pub fn new(initial: f32) -> Self {
        Self {
            current: initial,
            start: initial,
            target: initial,
            velocity: 0.0,
            animation: AnimationType::default(),
            started_at_ms: None,
            last_frame_ms: None,
            running: false,
        }
    }

    /// Starts animating toward `target`. Spring velocity carries over, so a
    /// retarget mid-flight stays smooth.
    pub fn animate_to(&mut self, target: f32, animation: AnimationType) {
        if !self.running && (self.current - target).abs() < f32::EPSILON {
            self.target = target;
            self.animation = animation;
            return;
        }
        self.start = self.current;
        self.target = target;
        self.animation = animation;
        self.started_at_ms = None;
        self.last_frame_ms = None;
        self.running = true;
    }

    /// Jumps to `value` and stops.
    pub fn snap_to(&mut self, value: f32) {
        self.current = value;
        self.start = value;
        self.target = value;
        self.velocity = 0.0;
        self.started_at_ms = None;
        self.last_frame_ms = None;
        self.running = false;
    }

    /// Advances to `frame_time_ms`. Returns whether the animation is still running.
    pub fn tick(&mut self, frame_time_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        match self.animation {
            AnimationType::Tween(spec) => self.tick_tween(spec, frame_time_ms),
            AnimationType::Spring(spec) => self.tick_spring(spec, frame_time_ms),
        }
        self.running
    }

    fn tick_tween(&mut self, spec: TweenSpec, frame_time_ms: u64) {
        let started = *self.started_at_ms.get_or_insert(frame_time_ms);
        let elapsed = frame_time_ms.saturating_sub(started);
        if elapsed < spec.delay_millis {
            return;
        }
        let duration = spec.duration_millis.max(1);
        let linear = ((elapsed - spec.delay_millis) as f32 / duration as f32).clamp(0.0, 1.0);
        self.current = self.start.lerp(&self.target, spec.easing.transform(linear));
        if linear >= 1.0 {
            self.finish();
        }
    }

    fn tick_spring(&mut self, spec: SpringSpec, frame_time_ms: u64) {
        let Some(last) = self.last_frame_ms.replace(frame_time_ms) else {
            return;
        };
        let dt = frame_time_ms.saturating_sub(last) as f32 / 1000.0;
        if dt == 0.0 {
            return;
        }

        let stiffness = spec.stiffness;
        let damping = spec.damping();
        let mut simulated = 0.0f32;
        while simulated < dt {
            let step = SPRING_STEP_SECONDS.min(dt - simulated);
            let displacement = self.current - self.target;
            let force = -stiffness * displacement - damping * self.velocity;
            self.velocity += force * step;
            self.current += self.velocity * step;
            simulated += step;
        }

        let at_rest = self.velocity.abs() < spec.velocity_threshold;
        let on_target = (self.current - self.target).abs() < spec.position_threshold;
        if at_rest && on_target {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.current = self.target;
        self.start = self.target;
        self.velocity = 0.0;
        self.started_at_ms = None;
        self.last_frame_ms = None;
        self.running = false;
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn animation(&self) -> AnimationType {
        self.animation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;

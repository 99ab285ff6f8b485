//! Per-press pointer sampling.
//!
//! The sampler remembers where the press started, the latest sample and the
//! horizontal velocity derived from the sample stream. It does no
//! classification of its own.

use crate::velocity_tracker::ImpulseVelocityTracker;
use crate::{GestureSample, Point};

/// How horizontal velocity is derived from the sample stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VelocityStrategy {
    /// Two-point difference between the latest sample and the one before it.
    #[default]
    Instantaneous,
    /// Impulse estimate over the last 100 ms of samples.
    Impulse,
}

#[derive(Clone, Debug, Default)]
pub struct InputSampler {
    strategy: VelocityStrategy,
    origin: Option<GestureSample>,
    previous: Option<GestureSample>,
    latest: Option<GestureSample>,
    velocity: f32,
    tracker: ImpulseVelocityTracker,
}

impl InputSampler {
    pub fn new(strategy: VelocityStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn strategy(&self) -> VelocityStrategy {
        self.strategy
    }

    /// Starts a new press at `sample`, discarding any previous history.
    pub fn begin(&mut self, sample: GestureSample) {
        self.origin = Some(sample);
        self.previous = None;
        self.latest = Some(sample);
        self.velocity = 0.0;
        self.tracker.reset();
        self.tracker.push(sample.timestamp_ms, sample.x);
    }

    /// Records a move sample and returns the updated velocity in px/s.
    ///
    /// A sample that does not advance time keeps the previous velocity, so
    /// duplicated host events are harmless. Without a prior [`begin`] the
    /// sample becomes the origin.
    ///
    /// [`begin`]: InputSampler::begin
    pub fn record(&mut self, sample: GestureSample) -> f32 {
        let Some(last) = self.latest else {
            self.begin(sample);
            return self.velocity;
        };

        if sample.timestamp_ms > last.timestamp_ms {
            self.tracker.push(sample.timestamp_ms, sample.x);
            self.velocity = match self.strategy {
                VelocityStrategy::Instantaneous => {
                    let dt_ms = (sample.timestamp_ms - last.timestamp_ms) as f32;
                    (sample.x - last.x) / dt_ms * 1000.0
                }
                VelocityStrategy::Impulse => self.tracker.velocity(),
            };
        } else {
            log::trace!(
                "sample at {}ms does not advance past {}ms; keeping velocity {}",
                sample.timestamp_ms,
                last.timestamp_ms,
                self.velocity
            );
        }

        self.previous = Some(last);
        self.latest = Some(sample);
        self.velocity
    }

    /// The pointer has gone still: velocity drops to zero until the next
    /// sample moves it again.
    pub fn settle(&mut self) {
        self.velocity = 0.0;
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn origin(&self) -> Option<GestureSample> {
        self.origin
    }

    pub fn previous(&self) -> Option<GestureSample> {
        self.previous
    }

    pub fn latest(&self) -> Option<GestureSample> {
        self.latest
    }

    pub fn position(&self) -> Option<Point> {
        self.latest.map(|sample| sample.position())
    }

    /// Horizontal distance from the press origin; negative is leftwards.
    pub fn displacement_x(&self) -> f32 {
        match (self.origin, self.latest) {
            (Some(origin), Some(latest)) => latest.x - origin.x,
            _ => 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.strategy);
    }
}

#[cfg(test)]
#[path = "tests/sampler_tests.rs"]
mod tests;

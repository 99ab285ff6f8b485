//! Smoothed velocity estimation using the impulse strategy.
//!
//! The impulse estimator treats each pair of samples as a push that adds
//! kinetic energy to a unit mass, then reads the velocity back from the total
//! energy. It is less jumpy than a two-point difference when the host delivers
//! unevenly spaced events.

/// Samples kept in the ring.
const CAPACITY: usize = 20;

/// Samples older than this (relative to the newest) are ignored.
const HORIZON_MS: u64 = 100;

/// A gap this long between consecutive samples means the pointer stopped.
pub const ASSUME_STOPPED_MS: u64 = 40;

#[derive(Clone, Copy, Debug)]
struct Timed {
    at_ms: u64,
    position: f32,
}

/// One-axis velocity tracker over absolute positions.
#[derive(Clone, Debug)]
pub struct ImpulseVelocityTracker {
    ring: [Option<Timed>; CAPACITY],
    head: usize,
}

impl Default for ImpulseVelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ImpulseVelocityTracker {
    pub fn new() -> Self {
        Self {
            ring: [None; CAPACITY],
            head: 0,
        }
    }

    pub fn push(&mut self, at_ms: u64, position: f32) {
        self.head = (self.head + 1) % CAPACITY;
        self.ring[self.head] = Some(Timed { at_ms, position });
    }

    /// Velocity in px/s, or 0.0 with fewer than two usable samples.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.ring[self.head] else {
            return 0.0;
        };

        // Walk newest to oldest, stopping at the horizon or at a long pause.
        let mut window: Vec<(f32, f32)> = Vec::with_capacity(CAPACITY);
        let mut cursor = self.head;
        let mut later = newest;
        while let Some(sample) = self.ring[cursor] {
            let age = newest.at_ms.saturating_sub(sample.at_ms);
            let gap = later.at_ms.abs_diff(sample.at_ms);
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            window.push((-(age as f32), sample.position));
            later = sample;
            cursor = (cursor + CAPACITY - 1) % CAPACITY;
            if window.len() == CAPACITY {
                break;
            }
        }

        if window.len() < 2 {
            return 0.0;
        }

        // Oldest first.
        window.reverse();
        let mut work = 0.0f32;
        for (index, pair) in window.windows(2).enumerate() {
            let (t0, p0) = pair[0];
            let (t1, p1) = pair[1];
            if t1 == t0 {
                continue;
            }
            let v_curr = (p1 - p0) / (t1 - t0);
            let v_prev = energy_to_velocity(work);
            work += (v_curr - v_prev) * v_curr.abs();
            if index == 0 {
                work *= 0.5;
            }
        }

        energy_to_velocity(work) * 1000.0
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[inline]
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_sample_report_zero() {
        let mut tracker = ImpulseVelocityTracker::new();
        assert_eq!(tracker.velocity(), 0.0);
        tracker.push(0, 10.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn steady_motion_is_recovered() {
        let mut tracker = ImpulseVelocityTracker::new();
        // 20 px every 10 ms = 2000 px/s leftwards
        for step in 0..5u64 {
            tracker.push(step * 10, 200.0 - step as f32 * 20.0);
        }
        let velocity = tracker.velocity();
        assert!(
            (velocity + 2000.0).abs() < 200.0,
            "expected ~-2000, got {velocity}"
        );
    }

    #[test]
    fn long_pause_drops_history() {
        let mut tracker = ImpulseVelocityTracker::new();
        tracker.push(0, 0.0);
        tracker.push(ASSUME_STOPPED_MS + 1, 100.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn reset_clears_samples() {
        let mut tracker = ImpulseVelocityTracker::new();
        tracker.push(0, 0.0);
        tracker.push(10, 50.0);
        tracker.reset();
        assert_eq!(tracker.velocity(), 0.0);
    }
}

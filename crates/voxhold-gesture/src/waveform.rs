use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::RecordingConfig;

/// Placeholder level meter: one random bar per waveform tick.
#[derive(Clone, Debug)]
pub struct Waveform {
    bars: Vec<f32>,
    min_height: f32,
    max_height: f32,
    rng: SmallRng,
}

impl Waveform {
    pub fn new(config: &RecordingConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Deterministic bars, for tests and replays.
    pub fn seeded(config: &RecordingConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: &RecordingConfig, rng: SmallRng) -> Self {
        Self {
            bars: Vec::new(),
            min_height: config.min_bar_height,
            max_height: config.max_bar_height,
            rng,
        }
    }

    /// Appends a bar with a height in `min..max` and returns it.
    pub fn push_bar(&mut self) -> f32 {
        let height = if self.max_height > self.min_height {
            self.rng.gen_range(self.min_height..self.max_height)
        } else {
            self.min_height
        };
        self.bars.push(height);
        height
    }

    pub fn bars(&self) -> &[f32] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn clear(&mut self) {
        self.bars.clear();
    }

    pub fn into_bars(self) -> Vec<f32> {
        self.bars
    }
}

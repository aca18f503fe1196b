use rand::Rng;

use crate::core::types::DataPoint;

const DEFAULT_BIAS: f64 = 0.01;
const START_VALUE: f64 = 3520.0;
const MAX_TIME_STEP_MS: u64 = 100;

/// Synthetic price source: each step adds `uniform(-0.5, 0.5) + bias`.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomWalkGenerator {
    bias: f64,
    last: f64,
}

impl Default for RandomWalkGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_BIAS)
    }
}

impl RandomWalkGenerator {
    #[must_use]
    pub fn new(bias: f64) -> Self {
        Self {
            bias,
            last: START_VALUE,
        }
    }

    #[must_use]
    pub fn last(&self) -> f64 {
        self.last
    }

    pub fn reset(&mut self) {
        self.last = START_VALUE;
    }

    pub fn next_series<R: Rng>(&mut self, rng: &mut R, count: usize) -> Vec<f64> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let step: f64 = rng.random::<f64>() - 0.5 + self.bias;
            self.last += step;
            values.push(self.last);
        }
        values
    }
}

/// Timestamps in epoch milliseconds with random `0..100` ms increments.
///
/// Increments of zero are allowed, so consecutive samples may share x.
pub fn jittered_timestamps<R: Rng>(rng: &mut R, start_ms: u64, count: usize) -> Vec<f64> {
    let mut current = start_ms;
    let mut times = Vec::with_capacity(count);
    for _ in 0..count {
        times.push(current as f64);
        current += rng.random_range(0..MAX_TIME_STEP_MS);
    }
    times
}

/// Pairs a random walk with jittered timestamps.
pub fn random_walk_points<R: Rng>(
    rng: &mut R,
    generator: &mut RandomWalkGenerator,
    start_ms: u64,
    count: usize,
) -> Vec<DataPoint> {
    let times = jittered_timestamps(rng, start_ms, count);
    let values = generator.next_series(rng, count);
    times
        .into_iter()
        .zip(values)
        .map(|(x, y)| DataPoint::new(x, y))
        .collect()
}

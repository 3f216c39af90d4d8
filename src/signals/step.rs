//! Unit step implementation.

use super::waveform::{Waveform, sample_with};
use crate::{SampledSequence, TimeGrid};

/// Instant at which the step switches on.
pub const STEP_ONSET: f64 = 0.5;

/// The unit step delayed to [`STEP_ONSET`]: `0` before it, `1` from it on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Step;

impl Step {
    fn value_at(t: f64) -> f64 {
        if t >= STEP_ONSET { 1.0 } else { 0.0 }
    }
}

impl Waveform for Step {
    fn sample(&self, grid: &TimeGrid) -> SampledSequence {
        sample_with(grid, Self::value_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onset_is_inclusive() {
        assert_eq!(Step::value_at(0.4999), 0.0);
        assert_eq!(Step::value_at(0.5), 1.0);
        assert_eq!(Step::value_at(0.75), 1.0);
    }

    #[test]
    fn test_sampled_step() {
        let grid = TimeGrid::linspace(0.0, 1.0, 5).unwrap();
        let samples = Step.sample(&grid);
        assert_eq!(samples.as_slice(), &[0.0, 0.0, 1.0, 1.0, 1.0]);
    }
}

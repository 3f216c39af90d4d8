//! Ramp implementation.

use super::waveform::{Waveform, sample_with};
use crate::{SampledSequence, TimeGrid};

/// The identity ramp: each sample equals its own instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ramp;

impl Waveform for Ramp {
    fn sample(&self, grid: &TimeGrid) -> SampledSequence {
        sample_with(grid, |t| t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_grid() {
        let grid = TimeGrid::linspace(-1.0, 4.0, 37).unwrap();
        let samples = Ramp.sample(&grid);
        assert_eq!(samples.as_slice(), grid.instants());
    }
}

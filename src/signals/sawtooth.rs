//! Sawtooth wave implementation.

use super::waveform::{Waveform, sample_with};
use crate::{SampledSequence, TimeGrid};

/// A sawtooth wave `2 · (t − floor(t + 0.5))`.
///
/// The waveform rises linearly from -1.0 to 1.0 with a period of one second,
/// crossing zero at every integer and jumping from 1.0 back to -1.0 at every
/// half-integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sawtooth;

impl Sawtooth {
    fn value_at(t: f64) -> f64 {
        2.0 * (t - (t + 0.5).floor())
    }
}

impl Waveform for Sawtooth {
    fn sample(&self, grid: &TimeGrid) -> SampledSequence {
        sample_with(grid, Self::value_at)
    }
}

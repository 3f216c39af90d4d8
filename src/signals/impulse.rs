//! Discrete impulse implementation.

use super::waveform::Waveform;
use crate::{SampledSequence, TimeGrid};

/// A single unit sample at index `n / 2` of an `n`-instant grid, zero elsewhere.
///
/// Unlike the other shapes the impulse is defined on sample indices, not on
/// time, so it has no pointwise formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Impulse;

impl Waveform for Impulse {
    fn sample(&self, grid: &TimeGrid) -> SampledSequence {
        let mut samples = vec![0.0; grid.len()];
        if let Some(peak) = samples.get_mut(grid.len() / 2) {
            *peak = 1.0;
        }
        samples.into()
    }
}

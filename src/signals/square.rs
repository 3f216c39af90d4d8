//! Square wave implementation.

use super::params::REFERENCE_FREQUENCY;
use super::waveform::{Waveform, sample_with};
use crate::{SampledSequence, TimeGrid};
use std::f64::consts::PI;

/// A square wave `sign(sin(2π · 5 · t))`.
///
/// Samples are `1.0`, `-1.0`, or `0.0` exactly where the underlying sine is
/// zero (for instance at `t = 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Square;

impl Square {
    fn value_at(t: f64) -> f64 {
        sign((2.0 * PI * REFERENCE_FREQUENCY * t).sin())
    }
}

impl Waveform for Square {
    fn sample(&self, grid: &TimeGrid) -> SampledSequence {
        sample_with(grid, Self::value_at)
    }
}

/// Three-valued sign. `f64::signum` maps `0.0` to `1.0`, which is not wanted here.
pub(crate) fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

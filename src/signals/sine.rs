//! Sine wave implementation.

use super::waveform::{ClosedForm, Waveform, sample_with};
use crate::{SampledSequence, SignalParams, TimeGrid};
use std::f64::consts::PI;

/// A sine wave `amplitude · sin(2π · frequency · t + phase)`.
///
/// The sine is the only shape with a closed form, so time scaling and time
/// shifting re-evaluate it analytically instead of interpolating samples.
///
/// # Examples
///
/// ```
/// use sigsys::{Sine, TimeGrid, Waveform};
///
/// let grid = TimeGrid::linspace(0.0, 0.2, 5).unwrap();
/// let samples = Sine::reference().sample(&grid);
/// assert!((samples[1] - 1.0).abs() < 1e-12); // quarter period at 5 Hz
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sine {
    params: SignalParams,
}

impl Sine {
    /// Creates a sine wave from a parameter bundle.
    pub fn new(params: SignalParams) -> Self {
        Self { params }
    }

    /// The reference sine `sin(2π · 5 · t)`.
    pub fn reference() -> Self {
        Self::new(SignalParams::default())
    }

    pub fn params(&self) -> SignalParams {
        self.params
    }
}

impl Default for Sine {
    fn default() -> Self {
        Self::reference()
    }
}

impl ClosedForm for Sine {
    fn value_at(&self, t: f64) -> f64 {
        let SignalParams {
            amplitude,
            frequency,
            phase,
        } = self.params;
        amplitude * (2.0 * PI * frequency * t + phase).sin()
    }
}

impl Waveform for Sine {
    fn sample(&self, grid: &TimeGrid) -> SampledSequence {
        sample_with(grid, |t| self.value_at(t))
    }

    fn closed_form(&self) -> Option<&dyn ClosedForm> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Sine::reference().value_at(0.0), 0.0);
    }

    #[test]
    fn test_sample_range() {
        let grid = TimeGrid::default();
        let samples = Sine::reference().sample(&grid);
        assert_eq!(samples.len(), grid.len());
        assert!(samples.iter().all(|x| (-1.0..=1.0).contains(&x)));
    }

    #[test]
    fn test_honors_parameters() {
        let sine = Sine::new(SignalParams::new(3.0, 2.0, PI / 2.0));
        // cos at t = 0, scaled by 3
        assert!((sine.value_at(0.0) - 3.0).abs() < 1e-12);
        // half a period later at 2 Hz
        assert!((sine.value_at(0.25) + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_has_closed_form() {
        let sine = Sine::reference();
        let closed = sine.closed_form().unwrap();
        assert_eq!(closed.value_at(0.05), sine.value_at(0.05));
    }

    #[test]
    fn test_zero_frequency_is_constant() {
        let sine = Sine::new(SignalParams::new(2.0, 0.0, PI / 6.0));
        let grid = TimeGrid::linspace(0.0, 1.0, 10).unwrap();
        let samples = sine.sample(&grid);
        assert!(samples.iter().all(|x| (x - 1.0).abs() < 1e-12));
    }
}

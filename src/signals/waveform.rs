//! Core traits implemented by every signal shape.

use crate::{SampledSequence, TimeGrid};

/// Common interface for everything that can be sampled on a [`TimeGrid`].
///
/// The trait provides two operations:
/// - Materialization via `sample()`
/// - An optional analytic capability via `closed_form()`
///
/// # Examples
///
/// ```
/// use sigsys::{Ramp, TimeGrid, Waveform};
///
/// let grid = TimeGrid::linspace(0.0, 1.0, 3).unwrap();
/// let ramp = Ramp.sample(&grid);
/// assert_eq!(ramp.as_slice(), &[0.0, 0.5, 1.0]);
/// assert!(Ramp.closed_form().is_none());
/// ```
pub trait Waveform {
    /// Samples the waveform at every instant of `grid`.
    ///
    /// # Returns
    ///
    /// A sequence with exactly `grid.len()` samples, sample `i` taken at `grid.instants()[i]`
    fn sample(&self, grid: &TimeGrid) -> SampledSequence;

    /// Returns the analytic form of this waveform, if it has one.
    ///
    /// Time-manipulating operations re-evaluate a waveform through its closed
    /// form instead of interpolating its samples. The default is `None`.
    fn closed_form(&self) -> Option<&dyn ClosedForm> {
        None
    }
}

/// A waveform that can be evaluated exactly at any instant.
pub trait ClosedForm {
    /// Value of the waveform at time `t` in seconds.
    fn value_at(&self, t: f64) -> f64;
}

/// Samples a pointwise function over the grid.
pub(crate) fn sample_with<F>(grid: &TimeGrid, f: F) -> SampledSequence
where
    F: Fn(f64) -> f64,
{
    grid.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl Waveform for Constant {
        fn sample(&self, grid: &TimeGrid) -> SampledSequence {
            sample_with(grid, |_| self.0)
        }
    }

    #[test]
    fn test_default_closed_form_is_none() {
        assert!(Constant(1.0).closed_form().is_none());
    }

    #[test]
    fn test_sample_with_preserves_length() {
        let grid = TimeGrid::linspace(0.0, 1.0, 7).unwrap();
        let seq = Constant(0.25).sample(&grid);
        assert_eq!(seq.len(), 7);
        assert!(seq.iter().all(|x| x == 0.25));
    }
}

//! Lookup of sampled sequences at arbitrary instants.
//!
//! Time-manipulating operations need the value of a sequence between its grid
//! instants. Lookups inside `[first, last]` of the grid are interpolated;
//! lookups outside it yield `0.0` (zero fill), never the nearest edge value.

use crate::TimeGrid;

/// Interpolation mode for off-grid lookups.
///
/// Determines how positions between two grid instants are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Round to the nearest instant
    Nearest,
    /// Linear interpolation between the two neighbouring instants
    #[default]
    Linear,
}

/// Reads `samples` at time `t`, with zero fill outside the grid's domain.
///
/// `samples` must be index-aligned with `grid` and `spacing` must be the
/// grid's spacing.
#[inline]
pub(crate) fn read_at(
    grid: &TimeGrid,
    spacing: f64,
    samples: &[f64],
    t: f64,
    mode: InterpolationMode,
) -> f64 {
    if !grid.contains(t) {
        return 0.0;
    }

    let last = samples.len() - 1;
    let position = (t - grid.first()) / spacing;

    match mode {
        InterpolationMode::Nearest => samples[(position.round() as usize).min(last)],
        InterpolationMode::Linear => {
            let index0 = position.floor() as usize;
            if index0 >= last {
                return samples[last];
            }
            let frac = position - index0 as f64;

            let sample0 = samples[index0];
            let sample1 = samples[index0 + 1];

            sample0 + frac * (sample1 - sample0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> TimeGrid {
        TimeGrid::linspace(0.0, 1.0, 5).unwrap()
    }

    const SAMPLES: [f64; 5] = [0.0, 1.0, 4.0, 9.0, 16.0];

    #[test]
    fn test_linear_on_grid_points() {
        let grid = grid();
        for (i, t) in grid.iter().enumerate() {
            assert_eq!(read_at(&grid, 0.25, &SAMPLES, t, InterpolationMode::Linear), SAMPLES[i]);
        }
    }

    #[test]
    fn test_linear_between_points() {
        let grid = grid();
        let value = read_at(&grid, 0.25, &SAMPLES, 0.375, InterpolationMode::Linear);
        assert!((value - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_nearest() {
        let grid = grid();
        assert_eq!(read_at(&grid, 0.25, &SAMPLES, 0.3, InterpolationMode::Nearest), 1.0);
        assert_eq!(read_at(&grid, 0.25, &SAMPLES, 0.9, InterpolationMode::Nearest), 16.0);
    }

    #[test]
    fn test_zero_fill_outside_domain() {
        let grid = grid();
        for mode in [InterpolationMode::Nearest, InterpolationMode::Linear] {
            assert_eq!(read_at(&grid, 0.25, &SAMPLES, -0.01, mode), 0.0);
            assert_eq!(read_at(&grid, 0.25, &SAMPLES, 1.01, mode), 0.0);
            assert_eq!(read_at(&grid, 0.25, &SAMPLES, f64::NAN, mode), 0.0);
        }
    }

    #[test]
    fn test_default_mode_is_linear() {
        assert_eq!(InterpolationMode::default(), InterpolationMode::Linear);
    }
}

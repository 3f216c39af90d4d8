//! Evenly spaced time grids.
//!
//! A [`TimeGrid`] is the shared, read-only time axis of one processing request.
//! Every sequence produced by the generator or the operation engine is
//! index-aligned with the grid it was sampled on.

use crate::error::{Error, Result};

/// Start of the reference grid in seconds.
pub const DEFAULT_START: f64 = 0.0;
/// End of the reference grid in seconds.
pub const DEFAULT_STOP: f64 = 1.0;
/// Number of instants in the reference grid.
pub const DEFAULT_COUNT: usize = 500;
/// Largest number of instants a grid may hold.
pub const MAX_COUNT: usize = 10_000_000;

/// An ordered, strictly increasing, evenly spaced sequence of sample instants.
///
/// Grids are immutable once built. Use [`TimeGrid::linspace`] for a
/// `(start, stop, count)` description, where the last instant is exactly
/// `stop`, or [`TimeGrid::from_step`] for a `(start, stop, step)` description,
/// where `stop` itself is excluded.
///
/// # Examples
///
/// ```
/// use sigsys::TimeGrid;
///
/// let grid = TimeGrid::linspace(0.0, 1.0, 5).unwrap();
/// assert_eq!(grid.instants(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(grid.spacing(), Some(0.25));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    instants: Vec<f64>,
    /// `None` for single-instant grids
    spacing: Option<f64>,
}

impl TimeGrid {
    /// Builds `count` evenly spaced instants from `start` to `stop` inclusive.
    ///
    /// A single-instant grid holds just `start`; it can be sampled but has
    /// no spacing, so interpolating operations reject it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateGrid`] if `count` is zero or above
    /// [`MAX_COUNT`], a bound is not finite, `stop <= start` while
    /// `count >= 2`, or the bounds are too far apart or too close together
    /// to give finite, strictly increasing instants.
    pub fn linspace(start: f64, stop: f64, count: usize) -> Result<Self> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(Error::DegenerateGrid(format!(
                "bounds must be finite, got [{}, {}]",
                start, stop
            )));
        }

        if count > MAX_COUNT {
            return Err(Error::DegenerateGrid(format!(
                "{} instants exceed the limit of {}",
                count, MAX_COUNT
            )));
        }

        match count {
            0 => Err(Error::DegenerateGrid(
                "a grid needs at least one instant".to_string(),
            )),
            1 => Ok(Self {
                instants: vec![start],
                spacing: None,
            }),
            _ => {
                if stop <= start {
                    return Err(Error::DegenerateGrid(format!(
                        "stop ({}) must be greater than start ({})",
                        stop, start
                    )));
                }
                let spacing = (stop - start) / (count - 1) as f64;
                if !spacing.is_finite() {
                    return Err(Error::DegenerateGrid(format!(
                        "span of [{}, {}] is not representable",
                        start, stop
                    )));
                }
                let mut grid = Self::uniform(start, spacing, count);
                // Pin the endpoint so rounding never pushes it past `stop`
                grid.instants[count - 1] = stop;
                grid.check_increasing()
            }
        }
    }

    /// Builds instants `start, start + step, ...` strictly below `stop`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateGrid`] if a value is not finite, `step` is
    /// not positive, the range holds no instant or more than [`MAX_COUNT`],
    /// or `step` is too small to separate neighbouring instants.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigsys::TimeGrid;
    ///
    /// let grid = TimeGrid::from_step(0.0, 1.0, 0.25).unwrap();
    /// assert_eq!(grid.instants(), &[0.0, 0.25, 0.5, 0.75]);
    /// ```
    pub fn from_step(start: f64, stop: f64, step: f64) -> Result<Self> {
        if !start.is_finite() || !stop.is_finite() || !step.is_finite() {
            return Err(Error::DegenerateGrid(format!(
                "start, stop and step must be finite, got ({}, {}, {})",
                start, stop, step
            )));
        }
        if step <= 0.0 {
            return Err(Error::DegenerateGrid(format!(
                "step must be positive, got {}",
                step
            )));
        }

        let count = ((stop - start) / step).ceil();
        if count < 1.0 {
            return Err(Error::DegenerateGrid(format!(
                "no instant in [{}, {}) with step {}",
                start, stop, step
            )));
        }
        if !count.is_finite() || count > MAX_COUNT as f64 {
            return Err(Error::DegenerateGrid(format!(
                "step {} over [{}, {}) exceeds the limit of {} instants",
                step, start, stop, MAX_COUNT
            )));
        }

        let count = count as usize;
        let mut grid = Self::uniform(start, step, count);
        if count == 1 {
            grid.spacing = None;
            return Ok(grid);
        }
        grid.check_increasing()
    }

    /// Rejects grids whose instants overflowed or collapsed onto each other.
    fn check_increasing(self) -> Result<Self> {
        let finite = self.instants.iter().all(|t| t.is_finite());
        let increasing = self.instants.windows(2).all(|w| w[0] < w[1]);
        if finite && increasing {
            Ok(self)
        } else {
            Err(Error::DegenerateGrid(format!(
                "spacing {:?} does not give strictly increasing finite instants from {}",
                self.spacing,
                self.first()
            )))
        }
    }

    fn uniform(start: f64, spacing: f64, count: usize) -> Self {
        let instants = (0..count).map(|i| start + i as f64 * spacing).collect();
        Self {
            instants,
            spacing: Some(spacing),
        }
    }

    /// Number of instants.
    pub fn len(&self) -> usize {
        self.instants.len()
    }

    /// Always false: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    /// The sample instants in increasing order.
    pub fn instants(&self) -> &[f64] {
        &self.instants
    }

    /// Iterates over the sample instants.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.instants.iter().copied()
    }

    /// First instant.
    pub fn first(&self) -> f64 {
        self.instants[0]
    }

    /// Last instant.
    pub fn last(&self) -> f64 {
        self.instants[self.instants.len() - 1]
    }

    /// Distance between neighbouring instants, `None` for a single instant.
    pub fn spacing(&self) -> Option<f64> {
        self.spacing
    }

    /// Like [`spacing`](Self::spacing) but reports a single-instant grid as an error.
    pub fn require_spacing(&self) -> Result<f64> {
        self.spacing.ok_or_else(|| {
            Error::DegenerateGrid("at least two instants are needed for a spacing".to_string())
        })
    }

    /// Whether `t` lies inside `[first, last]`.
    pub fn contains(&self, t: f64) -> bool {
        (self.first()..=self.last()).contains(&t)
    }
}

impl Default for TimeGrid {
    /// The reference grid: 500 instants over `[0, 1]`.
    fn default() -> Self {
        let spacing = (DEFAULT_STOP - DEFAULT_START) / (DEFAULT_COUNT - 1) as f64;
        let mut grid = Self::uniform(DEFAULT_START, spacing, DEFAULT_COUNT);
        grid.instants[DEFAULT_COUNT - 1] = DEFAULT_STOP;
        grid
    }
}

impl<'a> IntoIterator for &'a TimeGrid {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.instants.iter()
    }
}

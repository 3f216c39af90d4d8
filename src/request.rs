//! One-shot processing requests.
//!
//! A [`Request`] bundles everything a single "process" action needs: how to
//! build the grid, which signals to sample, which operation to apply and how
//! to interpolate. [`Request::process`] runs generate-then-apply and returns
//! the sequences a renderer needs.

use std::fmt;

use log::debug;

use crate::error::Result;
use crate::grid::{DEFAULT_COUNT, DEFAULT_START, DEFAULT_STOP};
use crate::operations::{InterpolationMode, Operation, OperationEngine, OperationKind, OperationOutput};
use crate::signals::{Signal, SignalKind, Waveform};
use crate::{SampledSequence, TimeGrid};

/// How to build the time grid of a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridSpec {
    /// `count` instants from `start` to `stop` inclusive
    Count { start: f64, stop: f64, count: usize },
    /// Instants `start, start + step, ...` strictly below `stop`
    Step { start: f64, stop: f64, step: f64 },
}

impl GridSpec {
    pub fn build(&self) -> Result<TimeGrid> {
        match *self {
            GridSpec::Count { start, stop, count } => TimeGrid::linspace(start, stop, count),
            GridSpec::Step { start, stop, step } => TimeGrid::from_step(start, stop, step),
        }
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        GridSpec::Count {
            start: DEFAULT_START,
            stop: DEFAULT_STOP,
            count: DEFAULT_COUNT,
        }
    }
}

/// A complete processing request.
///
/// The default request scales a reference sine by 2.0 over the reference grid.
///
/// # Examples
///
/// ```
/// use sigsys::Request;
///
/// let request = Request::from_names("Square", "Sine", "Amplitude Scaling", None).unwrap();
/// assert_eq!(
///     request.to_string(),
///     "Processing 'Square' and 'Sine' with 'Amplitude Scaling'"
/// );
///
/// let processed = request.process().unwrap();
/// assert_eq!(processed.grid.len(), 500);
/// assert!(processed.output.result().iter().all(|x| [-2.0, 0.0, 2.0].contains(&x)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Request {
    pub grid: GridSpec,
    pub first: Signal,
    /// Only sampled for binary operations
    pub second: Signal,
    pub operation: Operation,
    pub interpolation: InterpolationMode,
}

impl Request {
    /// A default request running `operation`.
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            ..Self::default()
        }
    }

    /// Builds a request from menu names.
    ///
    /// Both signals use default parameters. A missing `parameter` falls back
    /// to the operation's default.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidKind`](crate::Error::InvalidKind) for an unknown signal name
    /// - [`Error::InvalidOperation`](crate::Error::InvalidOperation) for an unknown operation name
    /// - [`Error::InvalidParameter`](crate::Error::InvalidParameter) for a non-finite parameter
    pub fn from_names(
        first: &str,
        second: &str,
        operation: &str,
        parameter: Option<f64>,
    ) -> Result<Self> {
        let first: SignalKind = first.parse()?;
        let second: SignalKind = second.parse()?;
        let kind: OperationKind = operation.parse()?;

        Ok(Self {
            first: first.into(),
            second: second.into(),
            operation: Operation::new(kind, parameter)?,
            ..Self::default()
        })
    }

    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_first(mut self, signal: impl Into<Signal>) -> Self {
        self.first = signal.into();
        self
    }

    pub fn with_second(mut self, signal: impl Into<Signal>) -> Self {
        self.second = signal.into();
        self
    }

    pub fn with_operation(mut self, operation: impl Into<Operation>) -> Self {
        self.operation = operation.into();
        self
    }

    pub fn with_interpolation(mut self, mode: InterpolationMode) -> Self {
        self.interpolation = mode;
        self
    }

    /// Builds the grid, samples the inputs and applies the operation.
    ///
    /// # Errors
    ///
    /// Propagates grid construction and operation errors.
    pub fn process(&self) -> Result<Processed> {
        let grid = self.grid.build()?;
        debug!("{} on {} instants", self, grid.len());

        let original = self.first.sample(&grid);
        let second = match self.operation.arity() {
            2 => Some(self.second.sample(&grid)),
            _ => None,
        };

        let output = OperationEngine::new()
            .with_interpolation(self.interpolation)
            .apply(
                self.operation,
                &grid,
                &original,
                second.as_ref(),
                Some(&self.first),
            )?;

        Ok(Processed {
            grid,
            original,
            output,
        })
    }
}

impl fmt::Display for Request {
    /// The status line shown while a request runs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processing '{}' and '{}' with '{}'",
            self.first.kind(),
            self.second.kind(),
            self.operation.kind()
        )
    }
}

/// Everything a renderer needs after a request ran.
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    pub grid: TimeGrid,
    /// The first input, sampled
    pub original: SampledSequence,
    pub output: OperationOutput,
}

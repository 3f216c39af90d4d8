//! Applying operations to sampled sequences.

use log::debug;

use super::interpolate::{InterpolationMode, read_at};
use super::{Operation, OperationKind};
use crate::error::{Error, Result};
use crate::signals::Waveform;
use crate::{SampledSequence, TimeGrid};

/// What an operation hands back to the caller.
///
/// Unary operations produce a single sequence. Binary operations surface both
/// inputs next to the result so they can be presented side by side.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutput {
    Single(SampledSequence),
    Combined {
        first: SampledSequence,
        second: SampledSequence,
        result: SampledSequence,
    },
}

impl OperationOutput {
    /// The transformed sequence.
    pub fn result(&self) -> &SampledSequence {
        match self {
            OperationOutput::Single(result) => result,
            OperationOutput::Combined { result, .. } => result,
        }
    }

    /// Consumes the output and returns the transformed sequence.
    pub fn into_result(self) -> SampledSequence {
        match self {
            OperationOutput::Single(result) => result,
            OperationOutput::Combined { result, .. } => result,
        }
    }

    pub fn is_combined(&self) -> bool {
        matches!(self, OperationOutput::Combined { .. })
    }
}

/// Applies [`Operation`]s to sequences sampled on a shared [`TimeGrid`].
///
/// The engine is a stateless configuration value; every call is independent.
///
/// # Examples
///
/// ```
/// use sigsys::{Operation, OperationEngine, Signal, SignalKind, TimeGrid, Waveform};
///
/// let grid = TimeGrid::default();
/// let ramp = Signal::reference(SignalKind::Ramp);
/// let samples = ramp.sample(&grid);
///
/// let engine = OperationEngine::new();
/// let output = engine
///     .apply(Operation::AmplitudeScaling { gain: 2.0 }, &grid, &samples, None, Some(&ramp))
///     .unwrap();
/// assert_eq!(output.result()[499], 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperationEngine {
    interpolation: InterpolationMode,
}

impl OperationEngine {
    /// Creates an engine with linear interpolation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to set the interpolation mode.
    pub fn with_interpolation(mut self, mode: InterpolationMode) -> Self {
        self.interpolation = mode;
        self
    }

    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation
    }

    /// Applies `operation` to `first` (and `second` for binary operations).
    ///
    /// # Arguments
    ///
    /// * `operation` - The operation and its parameter
    /// * `grid` - The grid both inputs were sampled on
    /// * `first` - First input sequence
    /// * `second` - Second input sequence, required by binary operations and ignored otherwise
    /// * `source` - How `first` was produced. When it has a closed form, time
    ///   scaling and shifting re-evaluate it exactly instead of interpolating
    ///
    /// # Errors
    ///
    /// - [`Error::LengthMismatch`] if an input does not match the grid length
    /// - [`Error::MissingOperand`] if a binary operation gets no `second`
    /// - [`Error::DegenerateGrid`] if interpolation is needed on a single-instant grid
    /// - [`Error::InvalidParameter`] if the parameter is not finite
    pub fn apply(
        &self,
        operation: Operation,
        grid: &TimeGrid,
        first: &SampledSequence,
        second: Option<&SampledSequence>,
        source: Option<&dyn Waveform>,
    ) -> Result<OperationOutput> {
        operation.validate()?;
        check_length(grid.len(), first)?;
        debug!(
            "applying {} to {} samples ({:?} interpolation)",
            operation,
            first.len(),
            self.interpolation
        );

        let output = match operation {
            Operation::TimeScaling { factor } => {
                OperationOutput::Single(self.warp(grid, first, source, |t| factor * t)?)
            }
            Operation::AmplitudeScaling { gain } => {
                OperationOutput::Single(first.iter().map(|x| gain * x).collect())
            }
            Operation::TimeShifting { shift } => {
                OperationOutput::Single(self.warp(grid, first, source, |t| t - shift)?)
            }
            Operation::TimeReversal => OperationOutput::Single(first.iter().rev().collect()),
            Operation::SignalAddition => combine(operation.kind(), first, second, |a, b| a + b)?,
            Operation::SignalMultiplication => {
                combine(operation.kind(), first, second, |a, b| a * b)?
            }
        };

        Ok(output)
    }

    /// Evaluates the input at `map(t)` for every grid instant `t`.
    fn warp<F>(
        &self,
        grid: &TimeGrid,
        samples: &SampledSequence,
        source: Option<&dyn Waveform>,
        map: F,
    ) -> Result<SampledSequence>
    where
        F: Fn(f64) -> f64,
    {
        if let Some(closed) = source.and_then(|s| s.closed_form()) {
            debug!("using closed form, no interpolation");
            return Ok(grid.iter().map(|t| closed.value_at(map(t))).collect());
        }

        let spacing = grid.require_spacing()?;
        Ok(grid
            .iter()
            .map(|t| read_at(grid, spacing, samples.as_slice(), map(t), self.interpolation))
            .collect())
    }
}

fn check_length(expected: usize, samples: &SampledSequence) -> Result<()> {
    if samples.len() == expected {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            expected,
            found: samples.len(),
        })
    }
}

fn combine<F>(
    kind: OperationKind,
    first: &SampledSequence,
    second: Option<&SampledSequence>,
    op: F,
) -> Result<OperationOutput>
where
    F: Fn(f64, f64) -> f64,
{
    let second = second.ok_or(Error::MissingOperand(kind))?;
    check_length(first.len(), second)?;

    let result = first
        .iter()
        .zip(second.iter())
        .map(|(a, b)| op(a, b))
        .collect();

    Ok(OperationOutput::Combined {
        first: first.clone(),
        second: second.clone(),
        result,
    })
}

/// Applies `operation` with a default [`OperationEngine`] (linear interpolation).
///
/// See [`OperationEngine::apply`] for the arguments and errors.
pub fn apply(
    operation: Operation,
    grid: &TimeGrid,
    first: &SampledSequence,
    second: Option<&SampledSequence>,
    source: Option<&dyn Waveform>,
) -> Result<OperationOutput> {
    OperationEngine::new().apply(operation, grid, first, second, source)
}

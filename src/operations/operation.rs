//! Operations paired with their scalar parameter.

use std::fmt;

use log::warn;

use super::OperationKind;
use crate::error::{Error, Result};

/// An operation together with its scalar parameter.
///
/// # Examples
///
/// ```
/// use sigsys::{Operation, OperationKind};
///
/// let op = Operation::new(OperationKind::AmplitudeScaling, None).unwrap();
/// assert_eq!(op, Operation::AmplitudeScaling { gain: 2.0 });
///
/// let op = Operation::new(OperationKind::TimeScaling, Some(0.5)).unwrap();
/// assert_eq!(op.parameter(), Some(0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// `x(a·t)`
    TimeScaling { factor: f64 },
    /// `A·x(t)`
    AmplitudeScaling { gain: f64 },
    /// `x(t − t0)`
    TimeShifting { shift: f64 },
    /// Sample order reversed, time axis kept
    TimeReversal,
    SignalAddition,
    SignalMultiplication,
}

impl Operation {
    /// Builds an operation, falling back to the kind's default parameter.
    ///
    /// A parameter given to an operation that takes none is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the parameter is not finite.
    pub fn new(kind: OperationKind, parameter: Option<f64>) -> Result<Self> {
        let value = match (kind.parameter(), parameter) {
            (Some(spec), Some(value)) => {
                if !value.is_finite() {
                    return Err(Error::InvalidParameter {
                        name: spec.symbol,
                        value,
                    });
                }
                value
            }
            (Some(spec), None) => spec.default,
            (None, Some(value)) => {
                warn!("{} takes no parameter, ignoring {}", kind, value);
                0.0
            }
            (None, None) => 0.0,
        };

        Ok(match kind {
            OperationKind::TimeScaling => Operation::TimeScaling { factor: value },
            OperationKind::AmplitudeScaling => Operation::AmplitudeScaling { gain: value },
            OperationKind::TimeShifting => Operation::TimeShifting { shift: value },
            OperationKind::TimeReversal => Operation::TimeReversal,
            OperationKind::SignalAddition => Operation::SignalAddition,
            OperationKind::SignalMultiplication => Operation::SignalMultiplication,
        })
    }

    /// The operation with its default parameter, if any.
    pub fn reference(kind: OperationKind) -> Self {
        match kind {
            OperationKind::TimeScaling => Operation::TimeScaling { factor: 1.0 },
            OperationKind::AmplitudeScaling => Operation::AmplitudeScaling { gain: 2.0 },
            OperationKind::TimeShifting => Operation::TimeShifting { shift: 0.1 },
            OperationKind::TimeReversal => Operation::TimeReversal,
            OperationKind::SignalAddition => Operation::SignalAddition,
            OperationKind::SignalMultiplication => Operation::SignalMultiplication,
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::TimeScaling { .. } => OperationKind::TimeScaling,
            Operation::AmplitudeScaling { .. } => OperationKind::AmplitudeScaling,
            Operation::TimeShifting { .. } => OperationKind::TimeShifting,
            Operation::TimeReversal => OperationKind::TimeReversal,
            Operation::SignalAddition => OperationKind::SignalAddition,
            Operation::SignalMultiplication => OperationKind::SignalMultiplication,
        }
    }

    pub fn parameter(&self) -> Option<f64> {
        match *self {
            Operation::TimeScaling { factor } => Some(factor),
            Operation::AmplitudeScaling { gain } => Some(gain),
            Operation::TimeShifting { shift } => Some(shift),
            _ => None,
        }
    }

    pub fn arity(&self) -> usize {
        self.kind().arity()
    }

    /// Rejects non-finite parameters on values built by hand.
    pub(crate) fn validate(&self) -> Result<()> {
        match (self.kind().parameter(), self.parameter()) {
            (Some(spec), Some(value)) if !value.is_finite() => Err(Error::InvalidParameter {
                name: spec.symbol,
                value,
            }),
            _ => Ok(()),
        }
    }
}

impl Default for Operation {
    /// Amplitude scaling by 2.0.
    fn default() -> Self {
        Operation::reference(OperationKind::AmplitudeScaling)
    }
}

impl From<OperationKind> for Operation {
    fn from(kind: OperationKind) -> Self {
        Self::reference(kind)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind().parameter(), self.parameter()) {
            (Some(spec), Some(value)) => write!(f, "{} ({} = {})", self.kind(), spec.symbol, value),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

//! Operation kinds and their display metadata.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::signals::normalize_name;

/// Describes the scalar parameter an operation takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    /// Short symbol used in the formula, e.g. `"a"`
    pub symbol: &'static str,
    /// Human-readable label for input controls
    pub label: &'static str,
    /// Value used when the caller supplies none
    pub default: f64,
}

/// The elementary operations the engine can apply.
///
/// # Examples
///
/// ```
/// use sigsys::OperationKind;
///
/// let kind: OperationKind = "Time Shifting".parse().unwrap();
/// assert_eq!(kind, OperationKind::TimeShifting);
/// assert_eq!(kind.formula(), "x(t - t₀)");
/// assert_eq!(kind.parameter().unwrap().default, 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    TimeScaling,
    AmplitudeScaling,
    TimeShifting,
    TimeReversal,
    SignalAddition,
    SignalMultiplication,
}

impl OperationKind {
    /// Every operation, in menu order.
    pub const ALL: [OperationKind; 6] = [
        OperationKind::TimeScaling,
        OperationKind::AmplitudeScaling,
        OperationKind::TimeShifting,
        OperationKind::TimeReversal,
        OperationKind::SignalAddition,
        OperationKind::SignalMultiplication,
    ];

    /// Display name, e.g. `"Time Scaling"`.
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::TimeScaling => "Time Scaling",
            OperationKind::AmplitudeScaling => "Amplitude Scaling",
            OperationKind::TimeShifting => "Time Shifting",
            OperationKind::TimeReversal => "Time Reversal",
            OperationKind::SignalAddition => "Signal Addition",
            OperationKind::SignalMultiplication => "Signal Multiplication",
        }
    }

    /// The operation written as a formula over `x(t)`.
    pub fn formula(&self) -> &'static str {
        match self {
            OperationKind::TimeScaling => "x(at)",
            OperationKind::AmplitudeScaling => "A·x(t)",
            OperationKind::TimeShifting => "x(t - t₀)",
            OperationKind::TimeReversal => "x(-t)",
            OperationKind::SignalAddition => "x₁(t) + x₂(t)",
            OperationKind::SignalMultiplication => "x₁(t) · x₂(t)",
        }
    }

    /// Number of input sequences.
    pub fn arity(&self) -> usize {
        match self {
            OperationKind::SignalAddition | OperationKind::SignalMultiplication => 2,
            _ => 1,
        }
    }

    /// The scalar parameter, if the operation takes one.
    pub fn parameter(&self) -> Option<ParameterSpec> {
        match self {
            OperationKind::TimeScaling => Some(ParameterSpec {
                symbol: "a",
                label: "Scaling factor (a)",
                default: 1.0,
            }),
            OperationKind::AmplitudeScaling => Some(ParameterSpec {
                symbol: "A",
                label: "Amplitude (A)",
                default: 2.0,
            }),
            OperationKind::TimeShifting => Some(ParameterSpec {
                symbol: "t₀",
                label: "Shift (t₀)",
                default: 0.1,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = Error;

    /// Parses `"Time Scaling"`, `"TimeScaling"` or `"time_scaling"`.
    ///
    /// Unknown names are reported as [`Error::InvalidOperation`] instead of
    /// falling back to a pass-through.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        OperationKind::ALL
            .into_iter()
            .find(|kind| normalize_name(kind.name()) == wanted)
            .ok_or_else(|| Error::InvalidOperation(s.trim().to_string()))
    }
}

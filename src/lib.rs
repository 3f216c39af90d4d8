//! sigsys - Discrete-time test signals and elementary operations on them
//!
//! This library samples canonical test signals (sine, square, sawtooth, step,
//! impulse, ramp) on an evenly spaced time grid and applies time scaling,
//! amplitude scaling, time shifting, time reversal, addition and
//! multiplication to the resulting sequences.
//!
//! ```
//! use sigsys::{apply, generate, Operation, SignalKind, SignalParams, TimeGrid};
//!
//! let grid = TimeGrid::linspace(0.0, 1.0, 500)?;
//! let square = generate(SignalKind::Square, &grid, SignalParams::default());
//! let doubled = apply(Operation::AmplitudeScaling { gain: 2.0 }, &grid, &square, None, None)?;
//! assert!(doubled.result().iter().all(|x| [-2.0, 0.0, 2.0].contains(&x)));
//! # Ok::<(), sigsys::Error>(())
//! ```

pub mod error;
pub mod grid;
pub mod operations;
pub mod request;
pub mod sequence;
pub mod signals;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use grid::TimeGrid;
pub use operations::{
    InterpolationMode, Operation, OperationEngine, OperationKind, OperationOutput, ParameterSpec,
    apply,
};
pub use request::{GridSpec, Processed, Request};
pub use sequence::SampledSequence;
pub use signals::{
    ClosedForm, Impulse, Ramp, Sawtooth, Signal, SignalKind, SignalParams, Sine, Square, Step,
    Waveform, generate, generate_named,
};

#[cfg(feature = "macros")]
pub use sigsys_macros::{operation_kind, signal_kind};

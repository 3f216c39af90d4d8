//! Elementary operations on sampled sequences.
//!
//! This module provides the operation engine, including:
//! - `OperationKind` with display names, formulas, arity and parameter metadata
//! - `Operation` values carrying their scalar parameter
//! - `OperationEngine` and the `apply` entry point
//! - `InterpolationMode` for off-grid lookups during time scaling and shifting

mod engine;
mod interpolate;
mod kind;
mod operation;

pub use engine::{OperationEngine, OperationOutput, apply};
pub use interpolate::InterpolationMode;
pub use kind::{OperationKind, ParameterSpec};
pub use operation::Operation;

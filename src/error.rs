//! Error type shared by the generator, the operation engine and the request pipeline.

use thiserror::Error;

use crate::operations::OperationKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unknown signal kind: '{0}'")]
    InvalidKind(String),

    #[error("unknown operation: '{0}'")]
    InvalidOperation(String),

    #[error("sequence length mismatch: expected {expected} samples, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("degenerate time grid: {0}")]
    DegenerateGrid(String),

    #[error("{0} needs a second input sequence")]
    MissingOperand(OperationKind),

    #[error("invalid value for parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;

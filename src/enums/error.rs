//! # Error Module - Custom *Minvec* Error Type
//!
//! Defines the unified error type for Minvec.
//!
//! The variants follow the engine's error taxonomy: validation errors
//! (bad dtype names, length mismatches, out-of-range indexes, type
//! mismatches, failed string casts, ambiguous null branches), domain errors
//! (statistics over empty/all-null data, guarded zero division) and I/O
//! errors from the CSV boundary. Implements `Display` for readable output
//! and `Error` for integration with standard Rust error handling.

use std::error::Error;
use std::fmt;

/// Catch all error type for `Minvec`
#[derive(Debug, PartialEq)]
pub enum MinvecError {
    /// A dtype name outside the supported set was supplied.
    InvalidDtype {
        name: String,
    },
    /// A structurally invalid argument (empty condition list, zero step, ...).
    InvalidArgument {
        message: String,
    },
    /// An index at or beyond the vector length.
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    /// Two vectors that must share a length do not.
    LengthMismatch {
        expected: usize,
        found: usize,
    },
    /// Operand or schema dtype disagreement.
    TypeError {
        expected: &'static str,
        found: &'static str,
        message: Option<String>,
    },
    /// String content that does not parse into the cast target.
    CastParse {
        value: String,
        target: &'static str,
    },
    /// A statistic requested over an empty or entirely-null vector.
    NoData {
        message: &'static str,
    },
    /// Division by a literal zero with `zero_div` disabled.
    ZeroDivision,
    /// A null condition reached before any definite match in `select`.
    AmbiguousNull {
        index: usize,
    },
    /// Missing or unreadable file at the CSV boundary.
    Io {
        message: String,
    },
}

impl fmt::Display for MinvecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinvecError::InvalidDtype { name } => {
                write!(
                    f,
                    "Invalid dtype: '{}' is not one of int32, int64, float32, float64, bool, string.",
                    name
                )
            }
            MinvecError::InvalidArgument { message } => {
                write!(f, "Invalid argument: {}", message)
            }
            MinvecError::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: index {} on a vector of length {}.", index, len)
            }
            MinvecError::LengthMismatch { expected, found } => {
                write!(f, "Length mismatch: expected {}, found {}.", expected, found)
            }
            MinvecError::TypeError { expected, found, message } => {
                if let Some(msg) = message {
                    write!(f, "Type error: expected '{}', found '{}': {}", expected, found, msg)
                } else {
                    write!(f, "Type error: expected '{}', found '{}'.", expected, found)
                }
            }
            MinvecError::CastParse { value, target } => {
                write!(f, "Cast error: '{}' cannot be parsed as '{}'.", value, target)
            }
            MinvecError::NoData { message } => {
                write!(f, "No data: {}", message)
            }
            MinvecError::ZeroDivision => {
                write!(f, "Division by zero with zero_div disabled.")
            }
            MinvecError::AmbiguousNull { index } => {
                write!(
                    f,
                    "Ambiguous null condition at position {}: no definite branch matches.",
                    index
                )
            }
            MinvecError::Io { message } => {
                write!(f, "I/O error: {}", message)
            }
        }
    }
}

impl Error for MinvecError {}

impl From<std::io::Error> for MinvecError {
    fn from(err: std::io::Error) -> Self {
        MinvecError::Io {
            message: err.to_string(),
        }
    }
}

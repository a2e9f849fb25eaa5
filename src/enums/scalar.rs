//! # Scalar Module - *Unified Single-Element Value*
//!
//! One value out of a typed vector, used where the engine crosses dtype
//! boundaries dynamically: `select`/case-when choices and defaults, and
//! `Array::get`. The `From` impls let callers pass plain Rust literals at
//! those boundaries without naming the enum.

use std::fmt::{Display, Formatter};

use crate::enums::dtype::DType;
use crate::traits::print::format_float;

/// A single typed element.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
}

impl Scalar {
    /// The dtype this scalar belongs to.
    #[inline]
    pub fn dtype(&self) -> DType {
        match self {
            Scalar::Boolean(_) => DType::Boolean,
            Scalar::Int32(_) => DType::Int32,
            Scalar::Int64(_) => DType::Int64,
            Scalar::Float32(_) => DType::Float32,
            Scalar::Float64(_) => DType::Float64,
            Scalar::String(_) => DType::String,
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Boolean(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int32(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int64(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float32(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float64(v)
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::String(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_string())
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Boolean(v) => write!(f, "{}", v),
            Scalar::Int32(v) => write!(f, "{}", v),
            Scalar::Int64(v) => write!(f, "{}", v),
            Scalar::Float32(v) => write!(f, "{}", format_float(*v)),
            Scalar::Float64(v) => write!(f, "{}", format_float(*v)),
            Scalar::String(v) => write!(f, "\"{}\"", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_dtype() {
        assert_eq!(Scalar::from(1i32).dtype(), DType::Int32);
        assert_eq!(Scalar::from(1i64).dtype(), DType::Int64);
        assert_eq!(Scalar::from(true).dtype(), DType::Boolean);
        assert_eq!(Scalar::from("x").dtype(), DType::String);
        assert_eq!(Scalar::from(1.0f64).dtype(), DType::Float64);
    }
}

//! # Dtype Module - *Closed Logical Type Tag*
//!
//! The engine's type universe as a closed enum. Every kernel matches on it
//! exhaustively; there is no reflective dispatch. The string names here are
//! the external identifiers accepted by constructors, `astype` and CSV
//! schemas, including the `"int"` / `"float"` width aliases.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::enums::error::MinvecError;

/// Logical element type of a typed vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    String,
}

impl DType {
    /// Canonical external name of this dtype.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Boolean => "bool",
            DType::String => "string",
        }
    }

    /// True for the four numeric dtypes.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DType::Int32 | DType::Int64 | DType::Float32 | DType::Float64
        )
    }

    /// True for the two floating-point dtypes.
    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, DType::Float32 | DType::Float64)
    }
}

impl FromStr for DType {
    type Err = MinvecError;

    /// Parses an external dtype name. `"int"` aliases `"int64"` and
    /// `"float"` aliases `"float64"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int32" => Ok(DType::Int32),
            "int64" | "int" => Ok(DType::Int64),
            "float32" => Ok(DType::Float32),
            "float64" | "float" => Ok(DType::Float64),
            "bool" => Ok(DType::Boolean),
            "string" => Ok(DType::String),
            _ => Err(MinvecError::InvalidDtype {
                name: s.to_string(),
            }),
        }
    }
}

impl Display for DType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_names_roundtrip() {
        for dtype in [
            DType::Int32,
            DType::Int64,
            DType::Float32,
            DType::Float64,
            DType::Boolean,
            DType::String,
        ] {
            assert_eq!(dtype.name().parse::<DType>(), Ok(dtype));
        }
    }

    #[test]
    fn test_dtype_aliases() {
        assert_eq!("int".parse::<DType>(), Ok(DType::Int64));
        assert_eq!("float".parse::<DType>(), Ok(DType::Float64));
    }

    #[test]
    fn test_unknown_dtype_rejected() {
        let err = "decimal".parse::<DType>().unwrap_err();
        assert_eq!(
            err,
            MinvecError::InvalidDtype {
                name: "decimal".to_string()
            }
        );
    }
}

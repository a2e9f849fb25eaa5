//! # **Conversions** - *The Full Casting Matrix*
//!
//! `From`/`TryFrom` implementations between the typed vectors, wired into
//! the unified [`Array`] enum through [`Array::astype`], which covers every
//! ordered dtype pair.
//!
//! ## What's included
//! - **Numeric <-> Numeric** - widening/narrowing/truncating `as` value
//!   conversion between the integer and float widths.
//! - **Numeric <-> Bool** - nonzero is true; true/false become 1/0.
//! - **Any -> String** - canonical `Display` text (`"true"`/`"false"` for
//!   bools, decimal for numerics, shortest-roundtrip for floats).
//! - **String -> Numeric/Bool** - `FromStr` parsing with a `CastParse`
//!   error carrying the offending text; only non-null slots are parsed.
//!
//! ## Null masks & semantics
//! Every conversion preserves the source null mask positionally, and every
//! cast - identity included - returns a fresh, independent vector.

use crate::enums::array::Array;
use crate::enums::dtype::DType;
use crate::enums::error::MinvecError;
use crate::structs::variants::boolean::BooleanArray;
use crate::structs::variants::float::FloatArray;
use crate::structs::variants::integer::IntegerArray;
use crate::structs::variants::string::StringArray;
use crate::traits::masked_array::MaskedArray;

// Numeric <-> Numeric

macro_rules! num_cast_from {
    ($SrcArr:ident<$s:ty> => $DstArr:ident<$d:ty>) => {
        impl From<&$SrcArr<$s>> for $DstArr<$d> {
            fn from(src: &$SrcArr<$s>) -> Self {
                let data = src.data.iter().map(|&x| x as $d).collect();
                $DstArr {
                    data,
                    null_mask: src.null_mask.clone(),
                }
            }
        }
    };
}

num_cast_from!(IntegerArray<i32> => IntegerArray<i64>);
num_cast_from!(IntegerArray<i64> => IntegerArray<i32>);
num_cast_from!(IntegerArray<i32> => FloatArray<f32>);
num_cast_from!(IntegerArray<i32> => FloatArray<f64>);
num_cast_from!(IntegerArray<i64> => FloatArray<f32>);
num_cast_from!(IntegerArray<i64> => FloatArray<f64>);
num_cast_from!(FloatArray<f32> => FloatArray<f64>);
num_cast_from!(FloatArray<f64> => FloatArray<f32>);
num_cast_from!(FloatArray<f32> => IntegerArray<i32>);
num_cast_from!(FloatArray<f32> => IntegerArray<i64>);
num_cast_from!(FloatArray<f64> => IntegerArray<i32>);
num_cast_from!(FloatArray<f64> => IntegerArray<i64>);

// Bool <-> Numeric

macro_rules! bool_to_num_from {
    ($DstArr:ident<$d:ty>, $one:expr, $zero:expr) => {
        impl From<&BooleanArray> for $DstArr<$d> {
            fn from(src: &BooleanArray) -> Self {
                let data = (0..src.len)
                    .map(|i| if src.data.get(i) { $one } else { $zero })
                    .collect();
                $DstArr {
                    data,
                    null_mask: src.null_mask.clone(),
                }
            }
        }
    };
}

bool_to_num_from!(IntegerArray<i32>, 1, 0);
bool_to_num_from!(IntegerArray<i64>, 1, 0);
bool_to_num_from!(FloatArray<f32>, 1.0, 0.0);
bool_to_num_from!(FloatArray<f64>, 1.0, 0.0);

macro_rules! num_to_bool_from {
    ($SrcArr:ident<$s:ty>, $zero:expr) => {
        impl From<&$SrcArr<$s>> for BooleanArray {
            fn from(src: &$SrcArr<$s>) -> Self {
                let bools: Vec<bool> = src.data.iter().map(|&x| x != $zero).collect();
                let mut out = BooleanArray::from_slice(&bools);
                out.null_mask = src.null_mask.clone();
                out
            }
        }
    };
}

num_to_bool_from!(IntegerArray<i32>, 0);
num_to_bool_from!(IntegerArray<i64>, 0);
num_to_bool_from!(FloatArray<f32>, 0.0);
num_to_bool_from!(FloatArray<f64>, 0.0);

// Any -> String

macro_rules! to_string_from {
    ($SrcArr:ty) => {
        impl From<&$SrcArr> for StringArray {
            fn from(src: &$SrcArr) -> Self {
                let out = src.iter_opt().map(|x| x.map(|v| v.to_string())).collect();
                StringArray::from_options(out)
            }
        }
    };
}

to_string_from!(IntegerArray<i32>);
to_string_from!(IntegerArray<i64>);
to_string_from!(FloatArray<f32>);
to_string_from!(FloatArray<f64>);
to_string_from!(BooleanArray);

// String -> Numeric / Bool

macro_rules! parse_string_tryfrom {
    ($DstArr:ty, $d:ty, $target:literal) => {
        impl TryFrom<&StringArray> for $DstArr {
            type Error = MinvecError;

            fn try_from(src: &StringArray) -> Result<Self, Self::Error> {
                let mut out = Vec::with_capacity(src.len());
                for i in 0..src.len() {
                    match src.get_str(i) {
                        Some(s) => {
                            let v = s.parse::<$d>().map_err(|_| MinvecError::CastParse {
                                value: s.to_string(),
                                target: $target,
                            })?;
                            out.push(Some(v));
                        }
                        None => out.push(None),
                    }
                }
                Ok(<$DstArr>::from_options(out))
            }
        }
    };
}

parse_string_tryfrom!(IntegerArray<i32>, i32, "int32");
parse_string_tryfrom!(IntegerArray<i64>, i64, "int64");
parse_string_tryfrom!(FloatArray<f32>, f32, "float32");
parse_string_tryfrom!(FloatArray<f64>, f64, "float64");
parse_string_tryfrom!(BooleanArray, bool, "bool");

// Into the Array enum

impl From<IntegerArray<i32>> for Array {
    fn from(a: IntegerArray<i32>) -> Self {
        Array::Int32(a)
    }
}

impl From<IntegerArray<i64>> for Array {
    fn from(a: IntegerArray<i64>) -> Self {
        Array::Int64(a)
    }
}

impl From<FloatArray<f32>> for Array {
    fn from(a: FloatArray<f32>) -> Self {
        Array::Float32(a)
    }
}

impl From<FloatArray<f64>> for Array {
    fn from(a: FloatArray<f64>) -> Self {
        Array::Float64(a)
    }
}

impl From<BooleanArray> for Array {
    fn from(a: BooleanArray) -> Self {
        Array::Boolean(a)
    }
}

impl From<StringArray> for Array {
    fn from(a: StringArray) -> Self {
        Array::String(a)
    }
}

impl Array {
    /// Casts into `target`, covering every ordered dtype pair. Null
    /// positions survive exactly; the result never aliases the source, even
    /// for identity casts.
    pub fn astype(&self, target: DType) -> Result<Array, MinvecError> {
        let out = match (self, target) {
            (Array::Int32(a), DType::Int32) => Array::Int32(a.clone()),
            (Array::Int32(a), DType::Int64) => Array::Int64(a.into()),
            (Array::Int32(a), DType::Float32) => Array::Float32(a.into()),
            (Array::Int32(a), DType::Float64) => Array::Float64(a.into()),
            (Array::Int32(a), DType::Boolean) => Array::Boolean(a.into()),
            (Array::Int32(a), DType::String) => Array::String(a.into()),

            (Array::Int64(a), DType::Int32) => Array::Int32(a.into()),
            (Array::Int64(a), DType::Int64) => Array::Int64(a.clone()),
            (Array::Int64(a), DType::Float32) => Array::Float32(a.into()),
            (Array::Int64(a), DType::Float64) => Array::Float64(a.into()),
            (Array::Int64(a), DType::Boolean) => Array::Boolean(a.into()),
            (Array::Int64(a), DType::String) => Array::String(a.into()),

            (Array::Float32(a), DType::Int32) => Array::Int32(a.into()),
            (Array::Float32(a), DType::Int64) => Array::Int64(a.into()),
            (Array::Float32(a), DType::Float32) => Array::Float32(a.clone()),
            (Array::Float32(a), DType::Float64) => Array::Float64(a.into()),
            (Array::Float32(a), DType::Boolean) => Array::Boolean(a.into()),
            (Array::Float32(a), DType::String) => Array::String(a.into()),

            (Array::Float64(a), DType::Int32) => Array::Int32(a.into()),
            (Array::Float64(a), DType::Int64) => Array::Int64(a.into()),
            (Array::Float64(a), DType::Float32) => Array::Float32(a.into()),
            (Array::Float64(a), DType::Float64) => Array::Float64(a.clone()),
            (Array::Float64(a), DType::Boolean) => Array::Boolean(a.into()),
            (Array::Float64(a), DType::String) => Array::String(a.into()),

            (Array::Boolean(a), DType::Int32) => Array::Int32(a.into()),
            (Array::Boolean(a), DType::Int64) => Array::Int64(a.into()),
            (Array::Boolean(a), DType::Float32) => Array::Float32(a.into()),
            (Array::Boolean(a), DType::Float64) => Array::Float64(a.into()),
            (Array::Boolean(a), DType::Boolean) => Array::Boolean(a.clone()),
            (Array::Boolean(a), DType::String) => Array::String(a.into()),

            (Array::String(a), DType::Int32) => Array::Int32(a.try_into()?),
            (Array::String(a), DType::Int64) => Array::Int64(a.try_into()?),
            (Array::String(a), DType::Float32) => Array::Float32(a.try_into()?),
            (Array::String(a), DType::Float64) => Array::Float64(a.try_into()?),
            (Array::String(a), DType::Boolean) => Array::Boolean(a.try_into()?),
            (Array::String(a), DType::String) => Array::String(a.clone()),
        };
        Ok(out)
    }
}

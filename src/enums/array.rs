//! # Array Module - *Closed Tagged Union Over the Dtype Variants*
//!
//! The engine's dynamic boundary: one enum wrapping the six typed vectors,
//! with exhaustive pattern matching per kernel. Dtype-mismatched operand
//! pairs are rejected with explicit type errors - there is no reflective
//! dispatch and no silent coercion. Construction-from-text (CSV) and the
//! `select`/case-when evaluator produce and consume this type; statically
//! typed code works with the variants directly.

use std::fmt::{Display, Formatter};

use crate::enums::dtype::DType;
use crate::enums::error::MinvecError;
use crate::enums::scalar::Scalar;
use crate::kernels::select::CaseWhen;
use crate::structs::variants::boolean::BooleanArray;
use crate::structs::variants::float::FloatArray;
use crate::structs::variants::index::IndexArray;
use crate::structs::variants::integer::IntegerArray;
use crate::structs::variants::string::StringArray;
use crate::traits::masked_array::MaskedArray;

/// Unified typed vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Array {
    Int32(IntegerArray<i32>),
    Int64(IntegerArray<i64>),
    Float32(FloatArray<f32>),
    Float64(FloatArray<f64>),
    Boolean(BooleanArray),
    String(StringArray),
}

/// Applies `$expr` to the inner array of every variant, rewrapping the
/// result in the same variant.
macro_rules! dispatch_rewrap {
    ($self:expr, $a:ident => $expr:expr) => {
        match $self {
            Array::Int32($a) => Array::Int32($expr),
            Array::Int64($a) => Array::Int64($expr),
            Array::Float32($a) => Array::Float32($expr),
            Array::Float64($a) => Array::Float64($expr),
            Array::Boolean($a) => Array::Boolean($expr),
            Array::String($a) => Array::String($expr),
        }
    };
}

/// Applies `$expr` to the inner array of every variant, returning the
/// expression value unwrapped.
macro_rules! dispatch {
    ($self:expr, $a:ident => $expr:expr) => {
        match $self {
            Array::Int32($a) => $expr,
            Array::Int64($a) => $expr,
            Array::Float32($a) => $expr,
            Array::Float64($a) => $expr,
            Array::Boolean($a) => $expr,
            Array::String($a) => $expr,
        }
    };
}

/// Generates the `Scalar`-driven ordering comparisons, which only the four
/// numeric variants support.
macro_rules! impl_array_cmp_scala {
    ($($method:ident),+) => {
        impl Array {
            $(
                /// Scalar ordering comparison; requires a numeric vector and
                /// a scalar of exactly its dtype. Nulls propagate.
                pub fn $method(&self, elem: Scalar) -> Result<BooleanArray, MinvecError> {
                    match (self, elem) {
                        (Array::Int32(a), Scalar::Int32(v)) => Ok(a.$method(v)),
                        (Array::Int64(a), Scalar::Int64(v)) => Ok(a.$method(v)),
                        (Array::Float32(a), Scalar::Float32(v)) => Ok(a.$method(v)),
                        (Array::Float64(a), Scalar::Float64(v)) => Ok(a.$method(v)),
                        (arr, s) => Err(MinvecError::TypeError {
                            expected: arr.dtype().name(),
                            found: s.dtype().name(),
                            message: Some(
                                "ordering comparison requires a numeric vector and a matching scalar"
                                    .to_string(),
                            ),
                        }),
                    }
                }
            )+
        }
    };
}

impl_array_cmp_scala!(
    greater_than_scala,
    less_than_scala,
    greater_than_or_equal_scala,
    less_than_or_equal_scala
);

impl Array {
    /// An empty vector of the given dtype.
    pub fn empty(dtype: DType) -> Self {
        match dtype {
            DType::Int32 => Array::Int32(IntegerArray::default()),
            DType::Int64 => Array::Int64(IntegerArray::default()),
            DType::Float32 => Array::Float32(FloatArray::default()),
            DType::Float64 => Array::Float64(FloatArray::default()),
            DType::Boolean => Array::Boolean(BooleanArray::default()),
            DType::String => Array::String(StringArray::default()),
        }
    }

    /// The dtype tag of this vector. Fixed per instance; only `astype`
    /// produces a different one, and it always allocates a new vector.
    #[inline]
    pub fn dtype(&self) -> DType {
        match self {
            Array::Int32(_) => DType::Int32,
            Array::Int64(_) => DType::Int64,
            Array::Float32(_) => DType::Float32,
            Array::Float64(_) => DType::Float64,
            Array::Boolean(_) => DType::Boolean,
            Array::String(_) => DType::String,
        }
    }

    /// Number of logical elements, nulls included.
    #[inline]
    pub fn len(&self) -> usize {
        dispatch!(self, a => a.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of nulls.
    #[inline]
    pub fn null_count(&self) -> usize {
        dispatch!(self, a => a.null_count())
    }

    /// Bounds-checked element access.
    pub fn get(&self, idx: usize) -> Result<Option<Scalar>, MinvecError> {
        Ok(match self {
            Array::Int32(a) => a.get_checked(idx)?.map(Scalar::Int32),
            Array::Int64(a) => a.get_checked(idx)?.map(Scalar::Int64),
            Array::Float32(a) => a.get_checked(idx)?.map(Scalar::Float32),
            Array::Float64(a) => a.get_checked(idx)?.map(Scalar::Float64),
            Array::Boolean(a) => a.get_checked(idx)?.map(Scalar::Boolean),
            Array::String(a) => a.get_checked(idx)?.map(Scalar::String),
        })
    }

    /// Boolean-mask filtering; keeps positions that are definitely true.
    pub fn filter(&self, condition: &BooleanArray) -> Result<Array, MinvecError> {
        Ok(dispatch_rewrap!(self, a => a.filter(condition)?))
    }

    /// Positional gather; every index must be in range.
    pub fn take(&self, indexes: &IndexArray) -> Result<Array, MinvecError> {
        Ok(dispatch_rewrap!(self, a => a.take(indexes)?))
    }

    /// In-place sort; nulls always land at the end.
    pub fn sort(&mut self, ascending: bool) {
        dispatch!(self, a => a.sort(ascending))
    }

    /// Distinct values ascending, at most one null collapsed to the end.
    pub fn unique(&self) -> Array {
        dispatch_rewrap!(self, a => a.unique())
    }

    /// Concatenation; both operands must share one dtype.
    pub fn union_all(&self, other: &Array) -> Result<Array, MinvecError> {
        match (self, other) {
            (Array::Int32(a), Array::Int32(b)) => Ok(Array::Int32(a.union_all(b))),
            (Array::Int64(a), Array::Int64(b)) => Ok(Array::Int64(a.union_all(b))),
            (Array::Float32(a), Array::Float32(b)) => Ok(Array::Float32(a.union_all(b))),
            (Array::Float64(a), Array::Float64(b)) => Ok(Array::Float64(a.union_all(b))),
            (Array::Boolean(a), Array::Boolean(b)) => Ok(Array::Boolean(a.union_all(b))),
            (Array::String(a), Array::String(b)) => Ok(Array::String(a.union_all(b))),
            (a, b) => Err(Self::dtype_mismatch(a, b, "union_all")),
        }
    }

    /// Whole-vector Kleene equivalence; differing dtypes or lengths are
    /// definitely unequal, never null.
    pub fn all_equal(&self, other: &Array) -> Option<bool> {
        match (self, other) {
            (Array::Int32(a), Array::Int32(b)) => a.all_equal(b),
            (Array::Int64(a), Array::Int64(b)) => a.all_equal(b),
            (Array::Float32(a), Array::Float32(b)) => a.all_equal(b),
            (Array::Float64(a), Array::Float64(b)) => a.all_equal(b),
            (Array::Boolean(a), Array::Boolean(b)) => a.all_equal(b),
            (Array::String(a), Array::String(b)) => a.all_equal(b),
            _ => Some(false),
        }
    }

    /// Elementwise equality with simple null propagation.
    pub fn equal(&self, other: &Array) -> Result<BooleanArray, MinvecError> {
        match (self, other) {
            (Array::Int32(a), Array::Int32(b)) => a.equal(b),
            (Array::Int64(a), Array::Int64(b)) => a.equal(b),
            (Array::Float32(a), Array::Float32(b)) => a.equal(b),
            (Array::Float64(a), Array::Float64(b)) => a.equal(b),
            (Array::Boolean(a), Array::Boolean(b)) => a.equal(b),
            (Array::String(a), Array::String(b)) => a.equal(b),
            (a, b) => Err(Self::dtype_mismatch(a, b, "equal")),
        }
    }

    /// Elementwise inequality with simple null propagation.
    pub fn not_equal(&self, other: &Array) -> Result<BooleanArray, MinvecError> {
        match (self, other) {
            (Array::Int32(a), Array::Int32(b)) => a.not_equal(b),
            (Array::Int64(a), Array::Int64(b)) => a.not_equal(b),
            (Array::Float32(a), Array::Float32(b)) => a.not_equal(b),
            (Array::Float64(a), Array::Float64(b)) => a.not_equal(b),
            (Array::Boolean(a), Array::Boolean(b)) => a.not_equal(b),
            (Array::String(a), Array::String(b)) => a.not_equal(b),
            (a, b) => Err(Self::dtype_mismatch(a, b, "not_equal")),
        }
    }

    /// Scalar equality with simple null propagation; the scalar must match
    /// this vector's dtype exactly.
    pub fn equal_scala(&self, elem: Scalar) -> Result<BooleanArray, MinvecError> {
        match (self, elem) {
            (Array::Int32(a), Scalar::Int32(v)) => Ok(a.equal_scala(&v)),
            (Array::Int64(a), Scalar::Int64(v)) => Ok(a.equal_scala(&v)),
            (Array::Float32(a), Scalar::Float32(v)) => Ok(a.equal_scala(&v)),
            (Array::Float64(a), Scalar::Float64(v)) => Ok(a.equal_scala(&v)),
            (Array::Boolean(a), Scalar::Boolean(v)) => Ok(a.equal_scala(&v)),
            (Array::String(a), Scalar::String(v)) => Ok(a.equal_scala(&v)),
            (arr, s) => Err(MinvecError::TypeError {
                expected: arr.dtype().name(),
                found: s.dtype().name(),
                message: Some("scalar comparison requires a matching dtype".to_string()),
            }),
        }
    }

    /// Sample variance with `ddof` delta degrees of freedom; defined for
    /// the floating-point dtypes only.
    pub fn var(&self, ddof: usize) -> Result<f64, MinvecError> {
        match self {
            Array::Float32(a) => a.var(ddof),
            Array::Float64(a) => a.var(ddof),
            other => Err(MinvecError::TypeError {
                expected: "float32 or float64",
                found: other.dtype().name(),
                message: Some("`var` requires a floating-point dtype".to_string()),
            }),
        }
    }

    /// Starts a case-when evaluation over this vector; `default` pins the
    /// output dtype.
    pub fn case(&self, default: impl Into<Scalar>) -> CaseWhen<'_> {
        CaseWhen::new(self, default.into())
    }

    fn dtype_mismatch(a: &Array, b: &Array, op: &str) -> MinvecError {
        MinvecError::TypeError {
            expected: a.dtype().name(),
            found: b.dtype().name(),
            message: Some(format!("`{}` requires both vectors to share one dtype", op)),
        }
    }
}

impl Display for Array {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        dispatch!(self, a => a.fmt(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_and_len() {
        let arr = Array::Int64(IntegerArray::from_slice(&[1, 2, 3]));
        assert_eq!(arr.dtype(), DType::Int64);
        assert_eq!(arr.len(), 3);
        assert!(!arr.is_empty());
        assert!(Array::empty(DType::String).is_empty());
    }

    #[test]
    fn test_get_scalar() {
        let arr = Array::Float64(FloatArray::from_options(vec![Some(1.5), None]));
        assert_eq!(arr.get(0), Ok(Some(Scalar::Float64(1.5))));
        assert_eq!(arr.get(1), Ok(None));
        assert!(arr.get(2).is_err());
    }

    #[test]
    fn test_union_all_dtype_mismatch() {
        let a = Array::Int32(IntegerArray::from_slice(&[1]));
        let b = Array::Int64(IntegerArray::from_slice(&[1]));
        assert!(a.union_all(&b).is_err());
        assert_eq!(a.all_equal(&b), Some(false));
    }

    #[test]
    fn test_filter_and_take_dispatch() {
        let arr = Array::String(StringArray::from_slice(&["a", "b", "c"]));
        let cond = BooleanArray::from_slice(&[true, false, true]);
        let filtered = arr.filter(&cond).unwrap();
        assert_eq!(filtered.len(), 2);
        let taken = arr.take(&IndexArray::new(vec![2, 0])).unwrap();
        assert_eq!(taken.get(0), Ok(Some(Scalar::from("c"))));
    }

    #[test]
    fn test_scalar_comparison_type_errors() {
        let arr = Array::String(StringArray::from_slice(&["a"]));
        assert!(arr.less_than_scala(Scalar::Int64(1)).is_err());
        let nums = Array::Int64(IntegerArray::from_slice(&[1, 5]));
        assert!(nums.less_than_scala(Scalar::Int32(3)).is_err());
        assert_eq!(
            nums.less_than_scala(Scalar::Int64(3)).unwrap().to_options(),
            vec![Some(true), Some(false)]
        );
    }

    #[test]
    fn test_var_requires_float_dtype() {
        let floats = Array::Float64(FloatArray::from_slice(&[1.0, 2.0, 3.0, 4.0]));
        assert_eq!(floats.var(0), Ok(1.25));
        let ints = Array::Int64(IntegerArray::from_slice(&[1, 2, 3]));
        assert!(matches!(ints.var(0), Err(MinvecError::TypeError { .. })));
    }

    #[test]
    fn test_sort_and_unique_dispatch() {
        let mut arr = Array::Int32(IntegerArray::from_options(vec![
            Some(3),
            None,
            Some(1),
            Some(3),
        ]));
        arr.sort(true);
        assert_eq!(
            arr,
            Array::Int32(IntegerArray::from_options(vec![
                Some(1),
                Some(3),
                Some(3),
                None
            ]))
        );
        let uniq = arr.unique();
        assert_eq!(
            uniq,
            Array::Int32(IntegerArray::from_options(vec![Some(1), Some(3), None]))
        );
    }
}

//! # **IntegerArray Module** - *Fixed-Width Integer Vector*
//!
//! Nullable integer vector over a dense value buffer.
//!
//! ## Overview
//! - Logical type: fixed-width signed integers (`T: Integer`, i.e. `i32` / `i64`).
//! - Physical storage: `Vec<T>` plus optional bit-packed validity mask
//!   (`Bitmask`, 1 = valid, 0 = null). Null slots hold `0` as placeholder;
//!   kernels never observe the placeholder, only the mask.
//! - Usable standalone or as the integer arms of the unified [`crate::Array`] enum.
//!
//! ## Features
//! - **Construction** from slices, optional-value vectors, ranges
//!   (`arange`), repetition and sampling (via the `MaskedArray` surface).
//! - **Mutation**: push/set/pop/replace, preserving the length/validity
//!   invariants.
//! - **Kernels**: arithmetic, comparison, aggregation, sort/unique and the
//!   casting matrix all attach to this type from their kernel modules.

use std::fmt::{Display, Formatter};

use num_traits::Zero;

use crate::enums::error::MinvecError;
use crate::structs::bitmask::Bitmask;
use crate::traits::masked_array::MaskedArray;
use crate::traits::print::MAX_PREVIEW;
use crate::traits::type_unions::Integer;
use crate::{impl_numeric_arith, impl_numeric_compare, impl_primitive_array};

/// # IntegerArray
///
/// Nullable fixed-width integer vector.
///
/// ### Fields
/// - `data`: backing buffer of integer values; null slots hold `0`.
/// - `null_mask`: optional bit-packed validity bitmap.
///
/// ## Example
/// ```rust
/// use minvec::{IntegerArray, MaskedArray};
///
/// // Dense, no nulls
/// let arr = IntegerArray::<i64>::from_slice(&[1, 2, 3, 4]);
/// assert_eq!(arr.len(), 4);
/// assert_eq!(arr.get(2), Some(3));
///
/// // With nulls
/// let arr = IntegerArray::<i32>::from_options(vec![Some(10), None, Some(30)]);
/// assert_eq!(arr.get(1), None);
/// assert_eq!(arr.null_count(), 1);
/// ```
#[derive(PartialEq, Clone, Debug, Default)]
pub struct IntegerArray<T> {
    /// Backing buffer for values.
    pub data: Vec<T>,
    /// Optional null mask (bit-packed; 1=valid, 0=null).
    pub null_mask: Option<Bitmask>,
}

impl_primitive_array!(IntegerArray, Integer);
impl_numeric_arith!(IntegerArray, Integer);
impl_numeric_compare!(IntegerArray, Integer);

impl<T: Integer> IntegerArray<T> {
    /// Arithmetic range `[start, stop)` with the given step. The step must
    /// be nonzero and point toward `stop`.
    pub fn arange(start: T, stop: T, step: T) -> Result<Self, MinvecError> {
        if step.is_zero() {
            return Err(MinvecError::InvalidArgument {
                message: "arange step must be nonzero".to_string(),
            });
        }
        let mut data = Vec::new();
        let ascending = step > T::zero();
        let mut cur = start;
        while (ascending && cur < stop) || (!ascending && cur > stop) {
            data.push(cur);
            cur = cur + step;
        }
        Ok(Self {
            data,
            null_mask: None,
        })
    }
}

impl<T> Display for IntegerArray<T>
where
    T: Integer,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let len = self.len();
        let nulls = self.null_count();

        writeln!(f, "IntegerArray [{} values] (dtype: int, nulls: {})", len, nulls)?;

        write!(f, "[")?;
        for i in 0..usize::min(len, MAX_PREVIEW) {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.get(i) {
                Some(val) => write!(f, "{}", val)?,
                None => write!(f, "null")?,
            }
        }
        if len > MAX_PREVIEW {
            write!(f, ", … ({} total)", len)?;
        }
        write!(f, "]")
    }
}

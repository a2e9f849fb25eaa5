//! Nullable floating-point vector over a dense value buffer.
//!
//! Same physical shape as `IntegerArray` (`Vec<T>` + optional `Bitmask`),
//! instantiated for `f32` / `f64`. Null slots hold `0.0`; ordering-sensitive
//! kernels (sort, unique, max/min) go through the IEEE total order so NaN
//! cannot destabilize results.

use std::fmt::{Display, Formatter};

use num_traits::Zero;

use crate::enums::error::MinvecError;
use crate::structs::bitmask::Bitmask;
use crate::traits::masked_array::MaskedArray;
use crate::traits::print::{MAX_PREVIEW, format_float};
use crate::traits::type_unions::Float;
use crate::{impl_numeric_arith, impl_numeric_compare, impl_primitive_array};

/// Nullable fixed-width float vector.
///
/// ### Fields
/// - `data`: backing buffer of float values; null slots hold `0.0`.
/// - `null_mask`: optional bit-packed validity bitmap (1 = valid, 0 = null).
#[derive(PartialEq, Clone, Debug, Default)]
pub struct FloatArray<T> {
    /// Backing buffer for values.
    pub data: Vec<T>,
    /// Optional null mask (bit-packed; 1=valid, 0=null).
    pub null_mask: Option<Bitmask>,
}

impl_primitive_array!(FloatArray, Float);
impl_numeric_arith!(FloatArray, Float);
impl_numeric_compare!(FloatArray, Float);

impl<T: Float> FloatArray<T> {
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

impl<T> Display for FloatArray<T>
where
    T: Float,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let len = self.len();
        let nulls = self.null_count();

        writeln!(f, "FloatArray [{} values] (dtype: float, nulls: {})", len, nulls)?;

        write!(f, "[")?;
        for i in 0..usize::min(len, MAX_PREVIEW) {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.get(i) {
                Some(v) => write!(f, "{}", format_float(v))?,
                None => write!(f, "null")?,
            }
        }
        if len > MAX_PREVIEW {
            write!(f, ", … ({} total)", len)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_options_and_placeholder() {
        let arr = FloatArray::<f64>::from_options(vec![Some(1.5), None, Some(2.5)]);
        assert_eq!(arr.get(0), Some(1.5));
        assert_eq!(arr.get(1), None);
        assert_eq!(arr.data[1], 0.0);
        assert_eq!(arr.null_count(), 1);
    }

    #[test]
    fn test_set_and_pop() {
        let mut arr = FloatArray::<f32>::from_slice(&[0.1, 0.2, 0.3]);
        arr.set_checked(1, Some(7.7)).unwrap();
        assert_eq!(arr.get(1), Some(7.7));
        arr.set_checked(2, None).unwrap();
        assert_eq!(arr.pop(), Ok(None));
        assert_eq!(arr.len(), 2);
    }

    #[test]
    fn test_arange_float() {
        let arr = FloatArray::<f64>::arange(0.0, 1.0, 0.25).unwrap();
        assert_eq!(arr.data, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_filter_true_mask_is_identity() {
        let arr = FloatArray::<f64>::from_options(vec![Some(1.0), None, Some(3.0)]);
        let mask = crate::BooleanArray::repeat(true, 3);
        let filtered = arr.filter(&mask).unwrap();
        assert_eq!(filtered.to_options(), arr.to_options());
    }

    #[test]
    fn test_filter_drops_null_and_false_conditions() {
        let arr = FloatArray::<f64>::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        let cond = crate::BooleanArray::from_options(vec![
            Some(true),
            Some(false),
            None,
            Some(true),
        ]);
        let filtered = arr.filter(&cond).unwrap();
        assert_eq!(filtered.to_options(), vec![Some(1.0), Some(4.0)]);
        // Length mismatch is rejected.
        assert!(arr.filter(&crate::BooleanArray::repeat(true, 3)).is_err());
    }

    #[test]
    fn test_take_bounds_checked() {
        let arr = FloatArray::<f32>::from_options(vec![Some(1.0), None, Some(3.0)]);
        let taken = arr.take(&crate::IndexArray::new(vec![2, 1, 0])).unwrap();
        assert_eq!(taken.to_options(), vec![Some(3.0), None, Some(1.0)]);
        assert!(arr.take(&crate::IndexArray::new(vec![3])).is_err());
    }
}
